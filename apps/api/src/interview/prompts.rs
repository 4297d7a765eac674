// Interview prompt templates.

use crate::llm_client::prompts::fill_template;

pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate 10 technical interview questions for a {industry} professional{skills_clause}.

Each question should be multiple choice with 4 options.

Return the response in this JSON format only, no additional text:
{
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correct_answer": "string",
      "explanation": "string"
    }
  ]
}"#;

pub const IMPROVEMENT_TIP_PROMPT_TEMPLATE: &str = r#"The user got the following {industry} technical interview questions wrong:

{wrong_answers}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn/practice."#;

pub fn build_quiz_prompt(industry: &str, skills: &[String]) -> String {
    let skills_clause = if skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", skills.join(", "))
    };
    fill_template(
        QUIZ_PROMPT_TEMPLATE,
        &[("industry", industry), ("skills_clause", skills_clause.as_str())],
    )
}

pub fn build_improvement_tip_prompt(industry: &str, wrong_answers: &str) -> String {
    fill_template(
        IMPROVEMENT_TIP_PROMPT_TEMPLATE,
        &[("industry", industry), ("wrong_answers", wrong_answers)],
    )
}
