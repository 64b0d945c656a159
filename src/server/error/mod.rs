//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of the server. It wraps the
//! configuration, upstream and fixture errors and implements `IntoResponse` so
//! controllers can return it directly. Every error body is an `ErrorDto`.

pub mod config;
pub mod fixture;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, fixture::FixtureError, upstream::UpstreamError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure of the upstream scoring service.
    ///
    /// Delegates to `UpstreamError::into_response()`, which answers 502.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// Fixture data could not be loaded.
    ///
    /// Only raised at startup; results in 500 Internal Server Error.
    #[error(transparent)]
    FixtureErr(#[from] FixtureError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 502 Bad Gateway - For `UpstreamErr`, delegated to `UpstreamError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::UpstreamErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the status code each error variant maps to.
    ///
    /// Expected: 404, 502, then 500 for startup failures
    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::NotFound("Flight not found".to_string()), StatusCode::NOT_FOUND),
            (
                AppError::UpstreamErr(UpstreamError::Status {
                    status: 503,
                    message: "down".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::ConfigErr(ConfigError::MissingEnvVar("X".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::FixtureErr(FixtureError::Read {
                    path: "crew.json".to_string(),
                    source: std::io::ErrorKind::NotFound.into(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
