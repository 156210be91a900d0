//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Label is not part of the known weather vocabulary
    #[error("Unknown weather label: {0}")]
    UnknownLabel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_error_message() {
        let err = DomainError::UnknownLabel("drizzle".to_string());
        assert_eq!(err.to_string(), "Unknown weather label: drizzle");
    }
}
