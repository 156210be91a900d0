//! SkyLens backend integration
//!
//! Client for the weather service's HTTP endpoints: the `/weather-chat`
//! assistant and the `/predict` image classifier.

pub mod client;
mod models;

pub use client::{BackendClient, BackendConfig, BackendError, WeatherBackend};
pub use models::{ChatQuery, ChatReply};
