//! Axum route handlers for the Interview API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::interview::assessments::{list_assessments, save_quiz_result, SaveQuizRequest};
use crate::interview::quiz::{generate_quiz, QuizQuestion};
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/v1/interview/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<QuizResponse>, AppError> {
    let questions = generate_quiz(state.llm(), &user).await;
    Ok(Json(QuizResponse { questions }))
}

/// POST /api/v1/interview/assessments
pub async fn handle_save_result(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveQuizRequest>,
) -> Result<(StatusCode, Json<AssessmentRow>), AppError> {
    request.validate()?;
    let assessment = save_quiz_result(&state.db, state.llm(), &user, &request).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/interview/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    Ok(Json(list_assessments(&state.db, user.id).await?))
}
