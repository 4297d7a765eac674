//! Industry insight generation and the per-industry snapshot store.

use chrono::{DateTime, Duration, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::fallback::default_insights;
use crate::insights::prompts::build_insights_prompt;
use crate::llm_client::{generate_json, TextGenerator};
use crate::models::insight::{IndustryInsightRow, InsightReport};
use crate::models::user::User;

/// How long a stored snapshot is served before it is regenerated.
pub const REFRESH_INTERVAL_DAYS: i64 = 7;

/// Asks the model for a market snapshot of `industry`.
/// Returns the default snapshot when no model is configured or anything goes wrong.
pub async fn generate_ai_insights(llm: Option<&dyn TextGenerator>, industry: &str) -> InsightReport {
    let Some(llm) = llm else {
        return default_insights();
    };

    let prompt = build_insights_prompt(industry);
    match generate_json::<InsightReport>(llm, &prompt).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Insight generation failed for industry '{industry}', using defaults: {e}");
            default_insights()
        }
    }
}

pub fn next_update_after(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(REFRESH_INTERVAL_DAYS)
}

/// The stored snapshot if it can still be served at `now`; `None` means regenerate.
fn reusable_snapshot(
    existing: Option<IndustryInsightRow>,
    now: DateTime<Utc>,
) -> Option<IndustryInsightRow> {
    let row = existing?;
    if row.is_stale(now) {
        info!(
            "Insight for '{}' expired at {}, regenerating",
            row.industry, row.next_update
        );
        return None;
    }
    Some(row)
}

/// Returns the caller's industry snapshot, generating it when absent or past its refresh date.
pub async fn get_industry_insights(
    pool: &PgPool,
    llm: Option<&dyn TextGenerator>,
    user: &User,
) -> Result<IndustryInsightRow, AppError> {
    let industry = user
        .industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("Set an industry on your profile to see insights".to_string())
        })?;

    let existing = sqlx::query_as::<_, IndustryInsightRow>(
        "SELECT * FROM industry_insights WHERE industry = $1",
    )
    .bind(industry)
    .fetch_optional(pool)
    .await?;

    let now = Utc::now();
    if let Some(row) = reusable_snapshot(existing, now) {
        return Ok(row);
    }

    let report = generate_ai_insights(llm, industry).await;
    let row = store_insights(pool, industry, &report, now).await?;
    info!("Stored insight {} for industry '{industry}'", row.id);
    Ok(row)
}

async fn store_insights(
    pool: &PgPool,
    industry: &str,
    report: &InsightReport,
    now: DateTime<Utc>,
) -> Result<IndustryInsightRow, AppError> {
    // Upsert: concurrent first requests for one industry converge on a single row.
    Ok(sqlx::query_as::<_, IndustryInsightRow>(
        r#"
        INSERT INTO industry_insights
            (id, industry, salary_ranges, growth_rate, demand_level, top_skills,
             market_outlook, key_trends, recommended_skills, last_updated, next_update)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (industry) DO UPDATE SET
            salary_ranges = EXCLUDED.salary_ranges,
            growth_rate = EXCLUDED.growth_rate,
            demand_level = EXCLUDED.demand_level,
            top_skills = EXCLUDED.top_skills,
            market_outlook = EXCLUDED.market_outlook,
            key_trends = EXCLUDED.key_trends,
            recommended_skills = EXCLUDED.recommended_skills,
            last_updated = EXCLUDED.last_updated,
            next_update = EXCLUDED.next_update
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(industry)
    .bind(Json(&report.salary_ranges))
    .bind(report.growth_rate)
    .bind(report.demand_level.as_str())
    .bind(&report.top_skills)
    .bind(report.market_outlook.as_str())
    .bind(&report.key_trends)
    .bind(&report.recommended_skills)
    .bind(now)
    .bind(next_update_after(now))
    .fetch_one(pool)
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};
    use crate::models::insight::{DemandLevel, MarketOutlook};

    const MODEL_REPLY: &str = r#"```json
{
  "salary_ranges": [
    {"role": "Nurse", "min": 55000, "max": 95000, "median": 72000, "location": "US"}
  ],
  "growth_rate": 5.5,
  "demand_level": "Medium",
  "top_skills": ["Patient Care"],
  "market_outlook": "Neutral",
  "key_trends": ["Telehealth"],
  "recommended_skills": ["EHR Systems"]
}
```"#;

    #[tokio::test]
    async fn test_unset_credential_returns_default_snapshot() {
        let report = generate_ai_insights(None, "Tech").await;
        assert_eq!(report, default_insights());
        assert_eq!(report.salary_ranges.len(), 5);
    }

    #[tokio::test]
    async fn test_parses_fenced_model_reply() {
        let llm = CannedGenerator(MODEL_REPLY);
        let report = generate_ai_insights(Some(&llm), "Healthcare").await;
        assert_eq!(report.salary_ranges.len(), 1);
        assert_eq!(report.salary_ranges[0].role, "Nurse");
        assert!((report.growth_rate - 5.5).abs() < f64::EPSILON);
        assert_eq!(report.demand_level, DemandLevel::Medium);
        assert_eq!(report.market_outlook, MarketOutlook::Neutral);
    }

    #[tokio::test]
    async fn test_unknown_enum_value_falls_back() {
        let llm = CannedGenerator(
            r#"{"salary_ranges": [], "growth_rate": 3, "demand_level": "Extreme",
                "top_skills": [], "market_outlook": "Positive", "key_trends": [],
                "recommended_skills": []}"#,
        );
        let report = generate_ai_insights(Some(&llm), "Tech").await;
        assert_eq!(report, default_insights());
    }

    #[tokio::test]
    async fn test_model_failure_falls_back() {
        let report = generate_ai_insights(Some(&FailingGenerator), "Tech").await;
        assert_eq!(report, default_insights());
    }

    #[test]
    fn test_refresh_window_is_one_week() {
        let now = Utc::now();
        assert_eq!(next_update_after(now) - now, Duration::days(7));
    }

    fn stored_row(next_update: DateTime<Utc>) -> IndustryInsightRow {
        IndustryInsightRow {
            id: Uuid::new_v4(),
            industry: "Tech".to_string(),
            salary_ranges: Json(vec![]),
            growth_rate: 8.0,
            demand_level: "High".to_string(),
            top_skills: vec![],
            market_outlook: "Positive".to_string(),
            key_trends: vec![],
            recommended_skills: vec![],
            last_updated: next_update - Duration::days(REFRESH_INTERVAL_DAYS),
            next_update,
        }
    }

    #[test]
    fn test_staleness() {
        let now = Utc::now();
        let row = stored_row(now - Duration::days(1));
        assert!(row.is_stale(now));
        assert!(!row.is_stale(now - Duration::days(2)));
    }

    #[test]
    fn test_fresh_snapshot_is_served() {
        let now = Utc::now();
        let row = stored_row(now + Duration::days(3));
        let id = row.id;
        assert_eq!(reusable_snapshot(Some(row), now).map(|r| r.id), Some(id));
    }

    #[test]
    fn test_stale_or_missing_snapshot_is_regenerated() {
        let now = Utc::now();
        assert!(reusable_snapshot(Some(stored_row(now - Duration::hours(1))), now).is_none());
        assert!(reusable_snapshot(Some(stored_row(now)), now).is_none());
        assert!(reusable_snapshot(None, now).is_none());
    }
}
