use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, recommendation::RecommendationDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping recommendation endpoints in OpenAPI documentation
pub static RECOMMENDATION_TAG: &str = "recommendation";

/// Get the ranked crew candidates for a flight.
///
/// Candidates are returned in rank order exactly as scored; an empty list
/// means the flight exists but nobody qualifies.
///
/// # Arguments
/// - `flight_number` - Flight to fetch candidates for
///
/// # Returns
/// - `200 OK` - Ranked candidates, possibly empty
/// - `404 Not Found` - No flight with that number
/// - `502 Bad Gateway` - Upstream scoring service unavailable
#[utoipa::path(
    get,
    path = "/api/recommendations/{flight_number}",
    tag = RECOMMENDATION_TAG,
    params(
        ("flight_number" = String, Path, description = "Flight number")
    ),
    responses(
        (status = 200, description = "Ranked candidates for the flight", body = Vec<RecommendationDto>),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recommendations = state.backend.recommendations(&flight_number).await?;

    Ok(Json(recommendations))
}
