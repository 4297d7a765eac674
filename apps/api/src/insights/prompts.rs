// Industry insight prompt template. Fill `{industry}` before sending.

use crate::llm_client::prompts::fill_template;

pub const INSIGHTS_PROMPT_TEMPLATE: &str = r#"Analyze the current state of the {industry} industry and provide insights in ONLY the following JSON format without any additional notes or explanations:
{
  "salary_ranges": [
    { "role": "string", "min": number, "max": number, "median": number, "location": "string" }
  ],
  "growth_rate": number,
  "demand_level": "High" | "Medium" | "Low",
  "top_skills": ["skill1", "skill2"],
  "market_outlook": "Positive" | "Neutral" | "Negative",
  "key_trends": ["trend1", "trend2"],
  "recommended_skills": ["skill1", "skill2"]
}

IMPORTANT: Return ONLY the JSON. No additional text, notes, or markdown formatting.
Include at least 5 common roles for salary ranges.
Growth rate should be a percentage.
Include at least 5 skills and trends."#;

pub fn build_insights_prompt(industry: &str) -> String {
    fill_template(INSIGHTS_PROMPT_TEMPLATE, &[("industry", industry)])
}
