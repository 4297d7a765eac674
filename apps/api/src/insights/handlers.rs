use axum::{extract::State, Json};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::insights::generator::get_industry_insights;
use crate::models::insight::IndustryInsightRow;
use crate::state::AppState;

/// GET /api/v1/insights
pub async fn handle_get_insights(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<IndustryInsightRow>, AppError> {
    let insight = get_industry_insights(&state.db, state.llm(), &user).await?;
    Ok(Json(insight))
}
