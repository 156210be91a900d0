//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error (unreachable, timed out, non-success status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The backend answered with a payload we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
