//! Backend adapter - Implements the chat and classifier ports using integration_backend

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{ChatBackendPort, ClassifierPort},
};
use async_trait::async_trait;
use domain::ClassificationResult;
use integration_backend::{BackendClient, BackendConfig, BackendError, WeatherBackend};
use tracing::instrument;

/// Adapter for the weather service's HTTP endpoints
pub struct BackendAdapter {
    client: Arc<dyn WeatherBackend>,
}

impl std::fmt::Debug for BackendAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendAdapter")
            .field("client", &"WeatherBackend")
            .finish()
    }
}

impl BackendAdapter {
    /// Create an adapter over a reqwest client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: BackendConfig) -> Result<Self, ApplicationError> {
        let client =
            BackendClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::from_client(Arc::new(client)))
    }

    /// Wrap an existing backend client
    pub fn from_client(client: Arc<dyn WeatherBackend>) -> Self {
        Self { client }
    }

    /// Map integration error to application error
    fn map_error(err: BackendError) -> ApplicationError {
        match err {
            BackendError::ConnectionFailed(e)
            | BackendError::Timeout(e)
            | BackendError::RequestFailed(e)
            | BackendError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            BackendError::ParseError(e) => ApplicationError::InvalidResponse(e),
        }
    }
}

#[async_trait]
impl ChatBackendPort for BackendAdapter {
    #[instrument(skip(self, query))]
    async fn ask(&self, query: &str) -> Result<String, ApplicationError> {
        self.client.ask(query).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ClassifierPort for BackendAdapter {
    #[instrument(skip(self, image), fields(file_name = %file_name))]
    async fn classify(
        &self,
        image: Vec<u8>,
        file_name: String,
    ) -> Result<ClassificationResult, ApplicationError> {
        self.client
            .classify(image, &file_name)
            .await
            .map_err(Self::map_error)
    }
}
