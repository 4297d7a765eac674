//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::store::{get_resume, save_resume, SaveResumeRequest};
use crate::state::AppState;

/// GET /api/v1/resume
///
/// Responds with `null` until the user saves a resume.
pub async fn handle_get(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Option<ResumeRow>>, AppError> {
    Ok(Json(get_resume(&state.db, user.id).await?))
}

/// PUT /api/v1/resume
pub async fn handle_save(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    request.validate()?;
    Ok(Json(save_resume(&state.db, user.id, &request).await?))
}
