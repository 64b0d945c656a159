use crate::{client::model::error::ApiError, model::flight::FlightDto};

use super::{
    helper::get_json,
    path::{endpoint, endpoint_with_segment},
};

/// GET /api/flights
/// Get the full flight schedule
pub async fn get_all_flights() -> Result<Vec<FlightDto>, ApiError> {
    get_json(&endpoint("flights")).await
}

/// GET /api/flights/{flight_number}
/// Get a single flight
pub async fn get_flight(flight_number: &str) -> Result<FlightDto, ApiError> {
    get_json(&endpoint_with_segment("flights", flight_number)).await
}
