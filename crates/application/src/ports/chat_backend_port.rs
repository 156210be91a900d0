//! Chat backend port
//!
//! Defines the interface for sending a user query to the weather assistant.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the weather chat endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatBackendPort: Send + Sync {
    /// Send one query and wait for the full reply text
    ///
    /// Exactly one request is issued per call; implementations must not retry.
    async fn ask(&self, query: &str) -> Result<String, ApplicationError>;
}
