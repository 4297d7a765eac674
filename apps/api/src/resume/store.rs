//! Ownership-scoped persistence for the per-user markdown resume.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

/// Request body for saving the resume.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

impl SaveResumeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.trim().is_empty() {
            return Err(AppError::Validation("content cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// `None` when the user has never saved a resume.
pub async fn get_resume(pool: &PgPool, user_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Creates the user's resume or replaces its content.
pub async fn save_resume(
    pool: &PgPool,
    user_id: Uuid,
    request: &SaveResumeRequest,
) -> Result<ResumeRow, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, content)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE SET
            content = EXCLUDED.content,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&request.content)
    .fetch_one(pool)
    .await?;

    info!("Saved resume {} for user {}", row.id, user_id);
    Ok(row)
}
