//! Thin REST client for the crew backend.
//!
//! One function per endpoint. Calls are not retried, cached or timed out; any
//! failure comes back as an [`ApiError`](crate::client::model::error::ApiError)
//! for the calling page to handle.

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod assignment;

#[cfg(feature = "web")]
pub mod crew;

#[cfg(feature = "web")]
pub mod dashboard;

#[cfg(feature = "web")]
pub mod flight;

#[cfg(feature = "web")]
pub mod recommendation;

pub mod path;
