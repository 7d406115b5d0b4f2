//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rubik_solver::{PipelineError, SolverError};
use serde_json::json;

/// Errors that can occur during gateway start-up or request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An error propagated from the solve pipeline.
    #[error(transparent)]
    Solve(#[from] PipelineError),

    /// The solver backend failed its health check.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(SolverError),

    /// The request body is malformed or contains invalid values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An environment variable holds an unusable value.
    #[error("invalid configuration {key}={value:?}: {reason}")]
    InvalidConfig { key: String, value: String, reason: String },
}

impl GatewayError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Solve(
                PipelineError::InvalidScramble(_) | PipelineError::InvalidState(_),
            )
            | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::SolverUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Solve(_) | GatewayError::InvalidConfig { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
