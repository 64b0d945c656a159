use crate::{client::model::error::ApiError, model::recommendation::RecommendationDto};

use super::{helper::get_json, path::endpoint_with_segment};

/// GET /api/recommendations/{flight_number}
/// Ranked candidates for a flight, best first
pub async fn get_recommendations(flight_number: &str) -> Result<Vec<RecommendationDto>, ApiError> {
    get_json(&endpoint_with_segment("recommendations", flight_number)).await
}
