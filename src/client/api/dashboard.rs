use crate::{
    client::model::error::ApiError,
    model::dashboard::{DashboardStatsDto, HealthDto},
};

use super::{helper::get_json, path::endpoint};

/// GET /api/dashboard/stats
/// Aggregate counters for the dashboard cards
pub async fn get_dashboard_stats() -> Result<DashboardStatsDto, ApiError> {
    get_json(&endpoint("dashboard/stats")).await
}

/// GET /api/health
/// Liveness probe of the crew backend
pub async fn health_check() -> Result<HealthDto, ApiError> {
    get_json(&endpoint("health")).await
}
