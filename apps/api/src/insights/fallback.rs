//! Default market snapshot served when the model is unavailable.

use crate::models::insight::{DemandLevel, InsightReport, MarketOutlook, SalaryRange};

/// (role, min, max, median)
const SALARY_BANDS: &[(&str, f64, f64, f64)] = &[
    ("Junior Engineer", 30_000.0, 50_000.0, 40_000.0),
    ("Mid Engineer", 50_000.0, 90_000.0, 70_000.0),
    ("Senior Engineer", 90_000.0, 140_000.0, 115_000.0),
    ("Manager", 100_000.0, 160_000.0, 130_000.0),
    ("Director", 140_000.0, 200_000.0, 170_000.0),
];

const TOP_SKILLS: &[&str] = &[
    "Problem Solving",
    "Communication",
    "Leadership",
    "Time Management",
    "Teamwork",
];

const KEY_TRENDS: &[&str] = &[
    "AI Adoption",
    "Automation",
    "Remote Work",
    "Cloud Migration",
    "Data-Driven Decisions",
];

const RECOMMENDED_SKILLS: &[&str] = &[
    "SQL",
    "Python",
    "Project Management",
    "Public Speaking",
    "Writing",
];

/// The same snapshot regardless of industry.
pub fn default_insights() -> InsightReport {
    InsightReport {
        salary_ranges: SALARY_BANDS
            .iter()
            .map(|&(role, min, max, median)| SalaryRange {
                role: role.to_string(),
                min,
                max,
                median,
                location: "Remote".to_string(),
            })
            .collect(),
        growth_rate: 8.0,
        demand_level: DemandLevel::High,
        top_skills: to_strings(TOP_SKILLS),
        market_outlook: MarketOutlook::Positive,
        key_trends: to_strings(KEY_TRENDS),
        recommended_skills: to_strings(RECOMMENDED_SKILLS),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
