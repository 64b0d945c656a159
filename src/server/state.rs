//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It only holds the crew backend, which is never
//! mutated after startup, so no locking is involved.

use std::sync::Arc;

use super::service::backend::CrewBackend;

#[derive(Clone)]
pub struct AppState {
    /// Source of crew, flight and recommendation data.
    pub backend: Arc<CrewBackend>,
}

impl AppState {
    pub fn new(backend: CrewBackend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
