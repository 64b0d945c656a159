use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, flight::FlightDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Get every scheduled flight.
///
/// # Returns
/// - `200 OK` - All flights in schedule order
/// - `502 Bad Gateway` - Upstream scoring service unavailable
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "All scheduled flights", body = Vec<FlightDto>),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_all_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let flights = state.backend.flights().await?;

    Ok(Json(flights))
}

/// Get one flight by its flight number.
///
/// # Arguments
/// - `flight_number` - Flight number, e.g. `AI101`
///
/// # Returns
/// - `200 OK` - Flight details
/// - `404 Not Found` - No flight with that number
/// - `502 Bad Gateway` - Upstream scoring service unavailable
#[utoipa::path(
    get,
    path = "/api/flights/{flight_number}",
    tag = FLIGHT_TAG,
    params(
        ("flight_number" = String, Path, description = "Flight number")
    ),
    responses(
        (status = 200, description = "Flight details", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flight = state.backend.flight(&flight_number).await?;

    Ok(Json(flight))
}
