use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure talking to the upstream scoring service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Failed to reach crew backend: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-success status other than 404.
    #[error("Crew backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The upstream answered 200 with a body that does not match the contract.
    #[error("Crew backend sent an unexpected payload for {path}: {reason}")]
    Decode { path: String, reason: String },

    /// An endpoint path could not be joined onto the upstream base URL.
    #[error("Invalid crew backend endpoint: {0}")]
    Url(#[from] url::ParseError),
}

/// Upstream failures are reported as 502 Bad Gateway.
///
/// Details are logged server-side; the client only learns that the backend
/// could not be used.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Crew backend unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
