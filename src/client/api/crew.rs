use crate::{client::model::error::ApiError, model::crew::CrewMemberDto};

use super::{
    helper::get_json,
    path::{endpoint, endpoint_with_segment},
};

/// GET /api/crew
/// Get the full crew roster
pub async fn get_all_crew() -> Result<Vec<CrewMemberDto>, ApiError> {
    get_json(&endpoint("crew")).await
}

/// GET /api/crew/{emp_id}
/// Get a single crew member
pub async fn get_crew_member(emp_id: &str) -> Result<CrewMemberDto, ApiError> {
    get_json(&endpoint_with_segment("crew", emp_id)).await
}
