//! Value Objects - Immutable, identity-less domain primitives

mod label_metadata;
mod percentage;
mod turn_id;
mod weather_label;

pub use label_metadata::{Glyph, Icon, LabelMetadata, UNKNOWN_CONDITION};
pub use percentage::Percentage;
pub use turn_id::TurnId;
pub use weather_label::WeatherLabel;
