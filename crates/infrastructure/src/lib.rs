//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the weather service adapter, layered configuration and the
//! tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
