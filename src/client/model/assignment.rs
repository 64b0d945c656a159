use thiserror::Error;

use crate::{client::view_model::RecommendationView, model::assignment::AssignRequest};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("an assignment for {0} is already awaiting confirmation")]
    AlreadyPending(String),

    #[error("no assignment is awaiting confirmation")]
    NothingPending,

    #[error("assignment of {emp_id} to {flight_number} is no longer awaiting confirmation")]
    NoLongerPending { flight_number: String, emp_id: String },
}

/// Candidate and flight an assignment is being confirmed for.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAssignment {
    pub request: AssignRequest,
    pub candidate_name: String,
    pub designation: String,
    pub base_location: String,
    pub composite_score: f64,
}

impl PendingAssignment {
    pub fn new(flight_number: &str, candidate: &RecommendationView) -> Self {
        Self {
            request: AssignRequest {
                flight_number: flight_number.to_string(),
                emp_id: candidate.emp_id.clone(),
            },
            candidate_name: candidate.name.clone(),
            designation: candidate.designation.clone(),
            base_location: candidate.base_location.clone(),
            composite_score: candidate.composite_score,
        }
    }
}

/// Confirmation dialog state machine: idle → confirming → confirmed | cancelled.
///
/// A confirmation still open when the selected flight changes is moved to
/// `Discarded` so the page can tell the user it was dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AssignmentFlow {
    #[default]
    Idle,
    Confirming(PendingAssignment),
    Confirmed(PendingAssignment),
    Cancelled(PendingAssignment),
    Discarded(PendingAssignment),
}

impl AssignmentFlow {
    /// Opens the confirmation dialog for a candidate.
    pub fn begin(&mut self, pending: PendingAssignment) -> Result<(), AssignmentError> {
        if let AssignmentFlow::Confirming(current) = self {
            return Err(AssignmentError::AlreadyPending(
                current.candidate_name.clone(),
            ));
        }

        *self = AssignmentFlow::Confirming(pending);
        Ok(())
    }

    /// Accepts the pending assignment once `submitted` has been acknowledged.
    ///
    /// Only the exact request that is awaiting confirmation can be accepted.
    pub fn confirm(&mut self, submitted: &AssignRequest) -> Result<(), AssignmentError> {
        if !self.awaits(submitted) {
            return Err(AssignmentError::NoLongerPending {
                flight_number: submitted.flight_number.clone(),
                emp_id: submitted.emp_id.clone(),
            });
        }

        if let AssignmentFlow::Confirming(pending) = std::mem::take(self) {
            *self = AssignmentFlow::Confirmed(pending);
        }
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), AssignmentError> {
        match std::mem::take(self) {
            AssignmentFlow::Confirming(pending) => {
                *self = AssignmentFlow::Cancelled(pending);
                Ok(())
            }
            other => {
                *self = other;
                Err(AssignmentError::NothingPending)
            }
        }
    }

    /// Closes any outcome notice and returns to idle.
    pub fn dismiss(&mut self) {
        if !self.is_confirming() {
            *self = AssignmentFlow::Idle;
        }
    }

    /// Drops an open confirmation, returning what was dropped. Outcome notices
    /// are cleared as by [`AssignmentFlow::dismiss`].
    pub fn abandon(&mut self) -> Option<PendingAssignment> {
        match std::mem::take(self) {
            AssignmentFlow::Confirming(pending) => {
                *self = AssignmentFlow::Discarded(pending.clone());
                Some(pending)
            }
            _ => None,
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, AssignmentFlow::Confirming(_))
    }

    /// Whether `request` is the one awaiting confirmation.
    pub fn awaits(&self, request: &AssignRequest) -> bool {
        matches!(self, AssignmentFlow::Confirming(pending) if pending.request == *request)
    }

    pub fn pending(&self) -> Option<&PendingAssignment> {
        match self {
            AssignmentFlow::Idle => None,
            AssignmentFlow::Confirming(pending)
            | AssignmentFlow::Confirmed(pending)
            | AssignmentFlow::Cancelled(pending)
            | AssignmentFlow::Discarded(pending) => Some(pending),
        }
    }
}
