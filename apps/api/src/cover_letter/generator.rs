//! Cover letter generation and ownership-scoped persistence.
//!
//! Flow: build prompt → model (or fallback template when unconfigured/failing)
//!       → INSERT with status 'completed' → return the stored row.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cover_letter::fallback::fallback_letter;
use crate::cover_letter::prompts::build_cover_letter_prompt;
use crate::errors::AppError;
use crate::llm_client::{generate_text, TextGenerator};
use crate::models::cover_letter::CoverLetterRow;
use crate::models::user::User;

const COMPLETED: &str = "completed";

/// Request body for cover letter generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
}

impl CoverLetterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_title.trim().is_empty() {
            return Err(AppError::Validation("job_title cannot be empty".to_string()));
        }
        if self.company_name.trim().is_empty() {
            return Err(AppError::Validation(
                "company_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Produces the letter text. Never fails: any model problem yields the fallback letter.
pub async fn write_cover_letter(
    llm: Option<&dyn TextGenerator>,
    user: &User,
    request: &CoverLetterRequest,
) -> String {
    let Some(llm) = llm else {
        return fallback_letter(user, request);
    };

    let prompt = build_cover_letter_prompt(user, request);
    match generate_text(llm, &prompt).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Cover letter generation failed for user {}, using fallback: {e}", user.id);
            fallback_letter(user, request)
        }
    }
}

pub async fn generate_cover_letter(
    pool: &PgPool,
    llm: Option<&dyn TextGenerator>,
    user: &User,
    request: &CoverLetterRequest,
) -> Result<CoverLetterRow, AppError> {
    let content = write_cover_letter(llm, user, request).await;

    let row = sqlx::query_as::<_, CoverLetterRow>(
        r#"
        INSERT INTO cover_letters
            (id, user_id, content, job_description, company_name, job_title, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(&content)
    .bind(request.job_description.as_deref())
    .bind(&request.company_name)
    .bind(&request.job_title)
    .bind(COMPLETED)
    .fetch_one(pool)
    .await?;

    info!("Stored cover letter {} for user {}", row.id, user.id);
    Ok(row)
}

/// Newest first.
pub async fn list_cover_letters(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<CoverLetterRow>, AppError> {
    Ok(sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get_cover_letter(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<CoverLetterRow>, AppError> {
    Ok(sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

/// Returns `false` when no letter with that id belongs to the user.
pub async fn delete_cover_letter(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM cover_letters WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::testing::sample_user;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: "Data Engineer".to_string(),
            company_name: "Globex".to_string(),
            job_description: Some("Own the warehouse.".to_string()),
        }
    }

    #[tokio::test]
    async fn test_uses_model_text_when_available() {
        let llm = CannedGenerator("  # Cover Letter\n\nDear Globex team,\n");
        let letter = write_cover_letter(Some(&llm), &sample_user(), &request()).await;
        assert_eq!(letter, "# Cover Letter\n\nDear Globex team,");
    }

    #[tokio::test]
    async fn test_markdown_fence_tag_is_not_stored() {
        let llm = CannedGenerator("```markdown\nDear Hiring Manager,\n```");
        let letter = write_cover_letter(Some(&llm), &sample_user(), &request()).await;
        assert_eq!(letter, "Dear Hiring Manager,");
    }

    #[tokio::test]
    async fn test_falls_back_without_model() {
        let user = sample_user();
        let letter = write_cover_letter(None, &user, &request()).await;
        assert_eq!(letter, fallback_letter(&user, &request()));
    }

    #[tokio::test]
    async fn test_falls_back_on_model_failure() {
        let user = sample_user();
        let letter = write_cover_letter(Some(&FailingGenerator), &user, &request()).await;
        assert_eq!(letter, fallback_letter(&user, &request()));
    }

    #[tokio::test]
    async fn test_falls_back_on_empty_model_output() {
        let user = sample_user();
        let llm = CannedGenerator("```\n```");
        let letter = write_cover_letter(Some(&llm), &user, &request()).await;
        assert_eq!(letter, fallback_letter(&user, &request()));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut req = request();
        req.job_title = "  ".to_string();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));

        let mut req = request();
        req.company_name = String::new();
        assert!(req.validate().is_err());

        assert!(request().validate().is_ok());
    }
}
