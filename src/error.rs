//! Error types for the order validator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::FailureResponse;

// == Validator Error Enum ==
/// Unified error type for the order validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidatorError {
    /// Missing or invalid environment, or a catalog with the wrong structure.
    /// Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed or semantically invalid order input
    #[error("{0}")]
    Validation(String),

    /// Anything unexpected once the service is running
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ValidatorError {
    /// Builds a `Validation` error wrapping an underlying cause.
    pub fn invalid_order(cause: impl std::fmt::Display) -> Self {
        ValidatorError::Validation(format!("invalid order: {}", cause))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ValidatorError {
    fn into_response(self) -> Response {
        let (status, prefix) = match &self {
            ValidatorError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION ERROR"),
            ValidatorError::Configuration(_) | ValidatorError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL ERROR")
            }
        };

        let error = self.to_string();
        let body = Json(FailureResponse::new(
            error.clone(),
            format!("{}: {}", prefix, error),
        ));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the order validator.
pub type Result<T> = std::result::Result<T, ValidatorError>;
