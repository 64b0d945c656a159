use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::null_as_default;

/// Crewing state of a flight as reported by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    CrewNeeded,
    PartiallyAssigned,
    FullyAssigned,
    Unknown(String),
}

impl FlightStatus {
    /// Status implied by crew counts, used when the backend omits one.
    pub fn from_counts(assigned: u32, required: u32) -> Self {
        if assigned == 0 && required > 0 {
            Self::CrewNeeded
        } else if assigned < required {
            Self::PartiallyAssigned
        } else {
            Self::FullyAssigned
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::CrewNeeded => "Crew Needed",
            Self::PartiallyAssigned => "Partially Assigned",
            Self::FullyAssigned => "Fully Assigned",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for FlightStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Crew Needed" => Self::CrewNeeded,
            "Partially Assigned" => Self::PartiallyAssigned,
            "Fully Assigned" => Self::FullyAssigned,
            _ => Self::Unknown(value),
        }
    }
}

impl From<FlightStatus> for String {
    fn from(value: FlightStatus) -> Self {
        match value {
            FlightStatus::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum FlightPriority {
    High,
    Medium,
    Low,
    Unknown(String),
}

impl FlightPriority {
    pub fn label(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown(raw) => raw,
        }
    }
}

impl Default for FlightPriority {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for FlightPriority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Unknown(value),
        }
    }
}

impl From<FlightPriority> for String {
    fn from(value: FlightPriority) -> Self {
        match value {
            FlightPriority::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for FlightPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub flight_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aircraft: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub status: Option<FlightStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub priority: FlightPriority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew_assigned: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew_required: u32,
}

impl FlightDto {
    /// Reported status, falling back to the one implied by crew counts.
    pub fn effective_status(&self) -> FlightStatus {
        self.status
            .clone()
            .unwrap_or_else(|| FlightStatus::from_counts(self.crew_assigned, self.crew_required))
    }

    /// Seats still waiting for crew.
    pub fn open_positions(&self) -> u32 {
        self.crew_required.saturating_sub(self.crew_assigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(status: Option<&str>, assigned: u32, required: u32) -> FlightDto {
        FlightDto {
            flight_number: "AI101".to_string(),
            route: "DEL → BOM".to_string(),
            aircraft: "A320".to_string(),
            departure: "06:00".to_string(),
            origin: Some("DEL".to_string()),
            status: status.map(|s| FlightStatus::from(s.to_string())),
            priority: FlightPriority::High,
            crew_assigned: assigned,
            crew_required: required,
        }
    }

    /// Tests that the reported status wins over the crew counts.
    #[test]
    fn reported_status_is_authoritative() {
        let flight = flight(Some("Fully Assigned"), 1, 4);
        assert_eq!(flight.effective_status(), FlightStatus::FullyAssigned);
    }

    /// Tests deriving status from counts when the backend omits it.
    ///
    /// Expected: 0/4 needs crew, 2/4 partial, 4/4 full
    #[test]
    fn derives_missing_status_from_counts() {
        assert_eq!(flight(None, 0, 4).effective_status(), FlightStatus::CrewNeeded);
        assert_eq!(
            flight(None, 2, 4).effective_status(),
            FlightStatus::PartiallyAssigned
        );
        assert_eq!(flight(None, 4, 4).effective_status(), FlightStatus::FullyAssigned);
    }

    #[test]
    fn open_positions_never_underflow() {
        assert_eq!(flight(None, 2, 4).open_positions(), 2);
        assert_eq!(flight(None, 5, 4).open_positions(), 0);
    }

    /// Tests a flight row whose unknown values were exported as `null`.
    ///
    /// Expected: counts read as 0, missing status derived from the counts
    #[test]
    fn treats_null_fields_as_missing() {
        let flight: FlightDto = serde_json::from_str(
            r#"{"flightNumber": "AI303", "route": null, "status": null,
                "priority": null, "crewAssigned": null, "crewRequired": 2}"#,
        )
        .unwrap();

        assert_eq!(flight.route, "");
        assert_eq!(flight.status, None);
        assert_eq!(flight.priority, FlightPriority::default());
        assert_eq!(flight.crew_assigned, 0);
        assert_eq!(flight.effective_status(), FlightStatus::CrewNeeded);
    }

    /// Tests decoding a flight row straight from the backend payload.
    #[test]
    fn decodes_backend_payload() {
        let flight: FlightDto = serde_json::from_str(
            r#"{"flightNumber": "AI101", "route": "DEL-BOM", "aircraft": "A320",
                "departure": "06:00", "origin": "DEL", "status": "Partially Assigned",
                "priority": "Urgent", "crewAssigned": 2, "crewRequired": 4}"#,
        )
        .unwrap();

        assert_eq!(flight.status, Some(FlightStatus::PartiallyAssigned));
        assert_eq!(flight.priority, FlightPriority::Unknown("Urgent".to_string()));
        assert_eq!(flight.crew_assigned, 2);
        assert_eq!(flight.crew_required, 4);
    }
}
