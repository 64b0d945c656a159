use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::HealthDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the crew backend is running and how much data it holds.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Backend status with crew and flight counts", body = HealthDto),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let health = state.backend.health().await?;

    Ok(Json(health))
}
