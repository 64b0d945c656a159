use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::null_as_default;

/// Aggregate counters shown on the dashboard. Recomputed wholesale on every fetch.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_flights: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_crew: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub needs_assignment: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_performance: f64,
}

/// Liveness report of the crew backend.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HealthDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flights_count: u32,
}

impl HealthDto {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_counters_read_as_zero() {
        let stats: DashboardStatsDto = serde_json::from_str(
            r#"{"totalFlights": 4, "availableCrew": null, "needsAssignment": 1,
                "avgPerformance": null}"#,
        )
        .unwrap();

        assert_eq!(stats.total_flights, 4);
        assert_eq!(stats.available_crew, 0);
        assert_eq!(stats.avg_performance, 0.0);
    }
}
