//! Coordinator Error Types
//!
//! Protocol outcomes (unknown id, already solved, rejected candidate) are
//! not errors - they travel as in-band sentinel values in the response.
//! This module only covers genuine internal faults, which are logged at
//! the facade boundary and surface as a generic 500 with an empty body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Coordinator result type alias
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Internal fault inside the coordinator
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The table mutex was poisoned by a panicking holder
    #[error("Transaction table lock poisoned")]
    TablePoisoned,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoordinatorError {
    fn log(&self) {
        match self {
            CoordinatorError::TablePoisoned => {
                tracing::error!("Transaction table lock poisoned");
            }
            CoordinatorError::Internal(msg) => {
                tracing::error!(message = %msg, "Coordinator internal error");
            }
        }
    }
}

impl IntoResponse for CoordinatorError {
    fn into_response(self) -> Response {
        self.log();
        // Empty body: internal details stay in the server log
        (StatusCode::INTERNAL_SERVER_ERROR, ()).into_response()
    }
}
