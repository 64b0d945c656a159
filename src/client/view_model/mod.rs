//! Pure derivations from wire payloads to what the components render.
//!
//! Nothing in here touches signals or the network, so every rule about
//! formatting, styling and recommendation decomposition is testable on its own.

pub mod crew;
pub mod flight;
pub mod parameter;
pub mod recommendation;

pub use parameter::{display_name, Parameter, ScoreBand};
pub use recommendation::{build_recommendation_views, ContractIssue, RecommendationView};
