//! Persisting graded quiz attempts and reading the caller's history.

use anyhow::Context;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::fallback::fallback_industry;
use crate::interview::quiz::QuizQuestion;
use crate::interview::scoring::{grade, improvement_tip, score_percent};
use crate::llm_client::TextGenerator;
use crate::models::assessment::AssessmentRow;
use crate::models::user::User;

const CATEGORY: &str = "Technical";

/// Request body for saving a quiz attempt: the questions as served, and the
/// answers in the same order (`null` for unanswered).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveQuizRequest {
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub answers: Vec<Option<String>>,
}

impl SaveQuizRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.questions.is_empty() {
            return Err(AppError::Validation(
                "questions cannot be empty".to_string(),
            ));
        }
        if self.answers.len() > self.questions.len() {
            return Err(AppError::Validation(format!(
                "{} answers submitted for {} questions",
                self.answers.len(),
                self.questions.len()
            )));
        }
        Ok(())
    }
}

/// Grades the attempt, asks for an improvement tip when anything was missed, and stores it.
pub async fn save_quiz_result(
    pool: &PgPool,
    llm: Option<&dyn TextGenerator>,
    user: &User,
    request: &SaveQuizRequest,
) -> Result<AssessmentRow, AppError> {
    let results = grade(&request.questions, &request.answers);
    let score = score_percent(&results);
    let industry = user
        .industry
        .clone()
        .unwrap_or_else(|| fallback_industry(None));
    let tip = improvement_tip(llm, &industry, &results).await;

    let row = sqlx::query_as::<_, AssessmentRow>(
        r#"
        INSERT INTO assessments (id, user_id, quiz_score, questions, category, improvement_tip)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(score)
    .bind(Json(&results))
    .bind(CATEGORY)
    .bind(tip.as_deref())
    .fetch_one(pool)
    .await
    .context("Failed to save quiz result")?;

    info!(
        "Stored assessment {} for user {} (score {:.1})",
        row.id, user.id, score
    );
    Ok(row)
}

/// Oldest first, so clients can chart progress directly.
pub async fn list_assessments(pool: &PgPool, user_id: Uuid) -> Result<Vec<AssessmentRow>, AppError> {
    Ok(sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .context("Failed to fetch assessments")?)
}
