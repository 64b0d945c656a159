use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, crew::CrewMemberDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping crew endpoints in OpenAPI documentation
pub static CREW_TAG: &str = "crew";

/// Get the full crew roster.
#[utoipa::path(
    get,
    path = "/api/crew",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "All crew members", body = Vec<CrewMemberDto>),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_all_crew(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let crew = state.backend.crew().await?;

    Ok(Json(crew))
}

/// Get one crew member by employee id.
///
/// # Returns
/// - `200 OK` - Crew member details including certifications
/// - `404 Not Found` - No crew member with that id
/// - `502 Bad Gateway` - Upstream scoring service unavailable
#[utoipa::path(
    get,
    path = "/api/crew/{emp_id}",
    tag = CREW_TAG,
    params(
        ("emp_id" = String, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Crew member details", body = CrewMemberDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 502, description = "Crew backend unavailable", body = ErrorDto),
    ),
)]
pub async fn get_crew_member(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.backend.crew_member(&emp_id).await?;

    Ok(Json(member))
}
