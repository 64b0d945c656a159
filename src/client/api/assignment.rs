use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    client::model::error::ApiError,
    model::assignment::{AssignReceipt, AssignRequest},
};

/// Records a confirmed assignment.
///
/// The crew backend has no mutation endpoint yet, so the request is
/// acknowledged locally and nothing is sent over the network.
pub async fn submit_assignment(request: AssignRequest) -> Result<AssignReceipt, ApiError> {
    tracing::info!(
        "Assignment of {} to flight {} confirmed locally",
        request.emp_id,
        request.flight_number
    );

    Ok(AssignReceipt {
        request,
        confirmed_at: Utc::now(),
    })
}
