use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Command to place a candidate on a flight.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub flight_number: String,
    pub emp_id: String,
}

/// Acknowledgement of an accepted [`AssignRequest`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignReceipt {
    pub request: AssignRequest,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub confirmed_at: DateTime<Utc>,
}
