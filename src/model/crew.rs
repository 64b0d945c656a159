use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::{deserialize_id, null_as_default};

/// Assignability of a crew member.
///
/// Values outside the known set are kept as `Unknown` so a roster with a new
/// state still decodes and renders with a neutral style. Rosters that predate
/// the availability column treat everyone as available.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    #[default]
    Available,
    Fatigued,
    OnLeave,
    Unknown(String),
}

impl Availability {
    pub fn label(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Fatigued => "Fatigued",
            Self::OnLeave => "On Leave",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Available" => Self::Available,
            "Fatigued" => Self::Fatigued,
            "On Leave" => Self::OnLeave,
            _ => Self::Unknown(value),
        }
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CrewMemberDto {
    #[serde(rename = "emp_id", deserialize_with = "deserialize_id")]
    pub emp_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "baselocation")]
    pub base_location: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "hoursWorked7d")]
    pub hours_worked_7d: f64,
    #[serde(default, deserialize_with = "null_as_default", rename = "hoursWorked30d")]
    pub hours_worked_30d: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performance_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reliability_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_experience: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_flight_hours: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub availability: Availability,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests decoding a roster entry exported with a numeric employee id.
    ///
    /// Expected: id normalized to a string, missing numbers defaulted to 0
    #[test]
    fn decodes_numeric_id_and_defaults_missing_fields() {
        let crew: CrewMemberDto = serde_json::from_str(
            r#"{"emp_id": 1042, "name": "Jane Doe", "designation": "Captain",
                "baseLocation": "DEL", "performanceScore": 92}"#,
        )
        .unwrap();

        assert_eq!(crew.emp_id, "1042");
        assert_eq!(crew.performance_score, 92.0);
        assert_eq!(crew.hours_worked_7d, 0.0);
        assert_eq!(crew.total_flight_hours, 0.0);
        assert_eq!(crew.availability, Availability::Available);
        assert!(crew.certifications.is_empty());
    }

    /// Tests a roster entry whose unknown values were exported as `null`.
    ///
    /// Expected: nulls read like missing keys, availability falls back to Available
    #[test]
    fn treats_null_fields_as_missing() {
        let roster: Vec<CrewMemberDto> = serde_json::from_str(
            r#"[
                {"emp_id": "E1", "name": "Jane Doe", "designation": null,
                 "hoursWorked7d": null, "hoursWorked30d": 41.5,
                 "performanceScore": null, "availability": null,
                 "certifications": null},
                {"emp_id": "E2", "name": "Ravi Kumar", "availability": "On Leave"}
            ]"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].designation, "");
        assert_eq!(roster[0].hours_worked_7d, 0.0);
        assert_eq!(roster[0].hours_worked_30d, 41.5);
        assert_eq!(roster[0].performance_score, 0.0);
        assert_eq!(roster[0].availability, Availability::Available);
        assert!(roster[0].certifications.is_empty());
        assert_eq!(roster[1].availability, Availability::OnLeave);
    }

    /// Tests that the lowercase base location key used by older exports is accepted.
    #[test]
    fn accepts_lowercase_base_location() {
        let crew: CrewMemberDto = serde_json::from_str(
            r#"{"emp_id": "E7", "name": "Ravi", "baselocation": "BOM"}"#,
        )
        .unwrap();

        assert_eq!(crew.base_location, "BOM");
    }

    /// Tests that an unrecognized availability survives decoding.
    ///
    /// Expected: Unknown variant carrying the raw value, re-encoded unchanged
    #[test]
    fn keeps_unknown_availability() {
        let crew: CrewMemberDto = serde_json::from_str(
            r#"{"emp_id": "E9", "name": "Asha", "availability": "Backup"}"#,
        )
        .unwrap();

        assert_eq!(crew.availability, Availability::Unknown("Backup".to_string()));
        let json = serde_json::to_value(&crew).unwrap();
        assert_eq!(json["availability"], "Backup");
    }
}
