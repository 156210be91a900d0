//! Domain layer for SkyLens
//!
//! Contains the weather label vocabulary, the static presentation table,
//! classification results and the chat transcript model.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
