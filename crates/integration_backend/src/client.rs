//! SkyLens backend client
//!
//! HTTP client for the chat and classification endpoints.

use std::time::Duration;

use async_trait::async_trait;
use domain::ClassificationResult;
use reqwest::{
    Client, Response, StatusCode,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ChatQuery, ChatReply, image_mime_type};

/// Backend client errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Request to the backend failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Backend answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the weather service (default: <http://127.0.0.1:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the chat endpoint (default: /weather-chat)
    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Path of the classification endpoint (default: /predict)
    #[serde(default = "default_predict_path")]
    pub predict_path: String,

    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_chat_path() -> String {
    "/weather-chat".to_string()
}

fn default_predict_path() -> String {
    "/predict".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            predict_path: default_predict_path(),
            timeout_secs: None,
        }
    }
}

/// Operations offered by the weather service
#[async_trait]
pub trait WeatherBackend: Send + Sync {
    /// Send a chat query and return the assistant's reply text
    async fn ask(&self, query: &str) -> Result<String, BackendError>;

    /// Upload an image for classification
    async fn classify(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<ClassificationResult, BackendError>;
}

/// reqwest-based implementation of [`WeatherBackend`]
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, BackendError> {
        Self::new(BackendConfig::default())
    }

    /// Active configuration
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Join the base URL and an endpoint path
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Error for a non-success status, `None` on success
    fn status_error(status: StatusCode) -> Option<BackendError> {
        if status.is_server_error() {
            Some(BackendError::ServiceUnavailable(format!("HTTP {status}")))
        } else if !status.is_success() {
            Some(BackendError::RequestFailed(format!("HTTP {status}")))
        } else {
            None
        }
    }

    /// Reject non-success statuses
    fn check_status(response: Response) -> Result<Response, BackendError> {
        Self::status_error(response.status()).map_or(Ok(response), Err)
    }

    /// Buffer the full body and decode it as JSON
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            debug!(body_len = body.len(), error = %e, "Response body is not the expected JSON");
            BackendError::ParseError(e.to_string())
        })
    }
}

#[async_trait]
impl WeatherBackend for BackendClient {
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    async fn ask(&self, query: &str) -> Result<String, BackendError> {
        let url = self.endpoint_url(&self.config.chat_path);
        debug!(url = %url, "Sending chat query");

        let response = self
            .client
            .post(&url)
            .form(&ChatQuery { query })
            .send()
            .await?;

        // A payload with a `response` field is a reply whatever the status
        let status = response.status();
        match Self::decode::<ChatReply>(response).await {
            Ok(reply) => {
                if !status.is_success() {
                    debug!(status = %status, "Using reply from non-success response");
                }
                Ok(reply.response)
            },
            Err(err) => Err(Self::status_error(status).unwrap_or(err)),
        }
    }

    #[instrument(skip(self, image), fields(image_len = image.len()))]
    async fn classify(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<ClassificationResult, BackendError> {
        let url = self.endpoint_url(&self.config.predict_path);
        debug!(url = %url, "Uploading image for classification");

        let part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(image_mime_type(file_name))?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        Self::decode(Self::check_status(response)?).await
    }
}
