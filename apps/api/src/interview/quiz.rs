//! Quiz generation: model-authored questions, validated, with the static pool as fallback.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::interview::fallback::{fallback_industry, fallback_quiz};
use crate::interview::prompts::build_quiz_prompt;
use crate::llm_client::{generate_json, LlmError, TextGenerator};
use crate::models::user::User;

/// Number of questions served by the fallback pool.
pub const QUIZ_LENGTH: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    questions: Vec<QuizQuestion>,
}

/// Rejects quizzes a client could not grade: empty, wrong option count, or an
/// answer that is not one of the options.
fn validate_quiz(payload: QuizPayload) -> Result<Vec<QuizQuestion>, LlmError> {
    if payload.questions.is_empty() {
        return Err(LlmError::Malformed("quiz has no questions".to_string()));
    }
    for (i, q) in payload.questions.iter().enumerate() {
        if q.options.len() != OPTIONS_PER_QUESTION {
            return Err(LlmError::Malformed(format!(
                "question {i} has {} options",
                q.options.len()
            )));
        }
        if !q.options.contains(&q.correct_answer) {
            return Err(LlmError::Malformed(format!(
                "question {i} answer is not among its options"
            )));
        }
    }
    Ok(payload.questions)
}

pub async fn generate_quiz(llm: Option<&dyn TextGenerator>, user: &User) -> Vec<QuizQuestion> {
    let Some(llm) = llm else {
        return fallback_quiz(user.industry.as_deref(), &mut rand::thread_rng());
    };

    let industry = user
        .industry
        .clone()
        .unwrap_or_else(|| fallback_industry(None));
    let prompt = build_quiz_prompt(&industry, &user.skills);

    let result = generate_json::<QuizPayload>(llm, &prompt)
        .await
        .and_then(validate_quiz);
    match result {
        Ok(questions) => {
            info!("Generated {} quiz questions for user {}", questions.len(), user.id);
            questions
        }
        Err(e) => {
            warn!("Quiz generation failed for user {}, using fallback pool: {e}", user.id);
            fallback_quiz(user.industry.as_deref(), &mut rand::thread_rng())
        }
    }
}
