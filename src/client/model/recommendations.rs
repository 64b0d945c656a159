use dioxus_logger::tracing;

use crate::{
    client::model::{
        cache::{KeyedCache, RequestSequence, RequestToken},
        error::ApiError,
    },
    model::recommendation::RecommendationDto,
};

/// A recommendations fetch the page has to perform.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub flight_number: String,
    pub token: RequestToken,
}

/// State of the recommendations page.
///
/// The selected flight is mirrored into the `?flight=` query parameter; every
/// change of selection goes through [`RecommendationsState::select`] so that
/// superseded responses can be recognized and dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationsState {
    selected_flight: Option<String>,
    recommendations: KeyedCache<String, Vec<RecommendationDto>>,
    sequence: RequestSequence,
}

impl RecommendationsState {
    pub fn selected_flight(&self) -> Option<&str> {
        self.selected_flight.as_deref()
    }

    pub fn recommendations(&self) -> &KeyedCache<String, Vec<RecommendationDto>> {
        &self.recommendations
    }

    /// Selects a flight and returns the fetch to perform, if any.
    ///
    /// An empty key clears the selection. Re-selecting the current flight while
    /// its request is in flight or already answered issues nothing; after a
    /// failure it retries.
    pub fn select(&mut self, flight_number: &str) -> Option<FetchTicket> {
        let flight_number = flight_number.trim();

        if flight_number.is_empty() {
            self.selected_flight = None;
            self.recommendations = KeyedCache::NotFetched;
            self.sequence.invalidate();
            return None;
        }

        let same_flight = self.selected_flight.as_deref() == Some(flight_number);
        if same_flight && (self.recommendations.is_loading() || self.recommendations.is_fetched())
        {
            return None;
        }

        self.selected_flight = Some(flight_number.to_string());
        self.recommendations = KeyedCache::Loading {
            key: flight_number.to_string(),
        };

        Some(FetchTicket {
            flight_number: flight_number.to_string(),
            token: self.sequence.issue(),
        })
    }

    /// Stores the outcome of a fetch unless a newer selection superseded it.
    ///
    /// Returns whether the result was applied.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RecommendationDto>, ApiError>,
    ) -> bool {
        if !self.sequence.is_current(ticket.token) {
            tracing::debug!(
                "Dropping stale recommendations for flight {}",
                ticket.flight_number
            );
            return false;
        }

        let key = ticket.flight_number;
        self.recommendations = match result {
            Ok(data) => KeyedCache::Fetched { key, data },
            Err(error) => {
                tracing::error!("Failed to fetch recommendations for {}: {}", key, error);
                KeyedCache::Error { key, error }
            }
        };

        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn candidate(rank: u32) -> RecommendationDto {
        RecommendationDto {
            rank,
            emp_id: format!("E{}", rank),
            name: format!("Crew {}", rank),
            designation: "Cabin Crew".to_string(),
            base_location: "DEL".to_string(),
            composite_score: 90.0 - rank as f64,
            parameters: BTreeMap::new(),
            weights: BTreeMap::new(),
            key_strengths: Vec::new(),
        }
    }

    /// Tests that selecting a flight issues a fetch and marks it loading.
    #[test]
    fn selecting_issues_a_fetch() {
        let mut state = RecommendationsState::default();

        let ticket = state.select("AI101").unwrap();

        assert_eq!(ticket.flight_number, "AI101");
        assert_eq!(state.selected_flight(), Some("AI101"));
        assert!(state.recommendations().is_loading());
    }

    /// Tests selecting the same flight twice in a row.
    ///
    /// Expected: only the first selection issues a request, both before and
    /// after the response arrives
    #[test]
    fn reselecting_same_flight_is_idempotent() {
        let mut state = RecommendationsState::default();

        let ticket = state.select("AI101").unwrap();
        assert!(state.select("AI101").is_none());

        assert!(state.resolve(ticket, Ok(vec![candidate(1)])));
        assert!(state.select("AI101").is_none());
        assert_eq!(state.recommendations().data().map(Vec::len), Some(1));
    }

    /// Tests a response for a flight that is no longer selected.
    ///
    /// Expected: the late response for AI101 is dropped and AI202 keeps loading
    #[test]
    fn drops_superseded_response() {
        let mut state = RecommendationsState::default();

        let first = state.select("AI101").unwrap();
        let second = state.select("AI202").unwrap();

        assert!(!state.resolve(first, Ok(vec![candidate(1)])));
        assert!(state.recommendations().is_loading());
        assert_eq!(state.recommendations().key().map(String::as_str), Some("AI202"));

        assert!(state.resolve(second, Ok(vec![candidate(1), candidate(2)])));
        assert_eq!(state.recommendations().data().map(Vec::len), Some(2));
    }

    /// Tests clearing the selection while a request is outstanding.
    ///
    /// Expected: nothing fetched, results cleared, late response ignored
    #[test]
    fn empty_selection_clears_results() {
        let mut state = RecommendationsState::default();
        let ticket = state.select("AI101").unwrap();

        assert!(state.select("").is_none());
        assert_eq!(state.selected_flight(), None);
        assert_eq!(state.recommendations(), &KeyedCache::NotFetched);

        assert!(!state.resolve(ticket, Ok(vec![candidate(1)])));
        assert_eq!(state.recommendations(), &KeyedCache::NotFetched);
    }

    /// Tests that an empty list is a successful result, not an error.
    #[test]
    fn empty_result_is_fetched() {
        let mut state = RecommendationsState::default();
        let ticket = state.select("AI303").unwrap();

        state.resolve(ticket, Ok(Vec::new()));

        assert_eq!(state.recommendations().data().map(Vec::len), Some(0));
        assert!(state.recommendations().error().is_none());
    }

    /// Tests that a failed fetch can be retried by selecting the flight again.
    #[test]
    fn failure_allows_retry() {
        let mut state = RecommendationsState::default();
        let ticket = state.select("AI101").unwrap();

        state.resolve(
            ticket,
            Err(ApiError {
                status: 500,
                message: "Failed to send request".to_string(),
            }),
        );
        assert_eq!(state.recommendations().error().map(|e| e.status), Some(500));

        assert!(state.select("AI101").is_some());
        assert!(state.recommendations().is_loading());
    }
}
