use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the dashboard counters.
///
/// Returns the total number of flights, the number of available crew, the
/// number of flights still needing crew, and the average crew performance.
///
/// # Returns
/// - `200 OK` - Current dashboard counters
/// - `502 Bad Gateway` - Upstream scoring service unavailable
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Current dashboard counters", body = DashboardStatsDto),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.backend.dashboard_stats().await?;

    Ok(Json(stats))
}
