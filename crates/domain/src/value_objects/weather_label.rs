//! Weather label value object
//!
//! The fixed vocabulary of weather conditions the image classifier can emit.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::WeatherLabel;
//!
//! let label: WeatherLabel = "RAIN".parse().expect("known label");
//! assert_eq!(label, WeatherLabel::Rain);
//! assert_eq!(label.key(), "rain");
//!
//! let fog: WeatherLabel = "Fog/Smog".parse().expect("known label");
//! assert_eq!(fog, WeatherLabel::FogSmog);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A weather condition recognized by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherLabel {
    Dew,
    #[serde(rename = "fogsmog")]
    FogSmog,
    Frost,
    Glaze,
    Hail,
    Lightning,
    Rain,
    Rainbow,
    Rime,
    Sandstorm,
    Snow,
}

impl WeatherLabel {
    /// Every label, in table order
    pub const ALL: [Self; 11] = [
        Self::Dew,
        Self::FogSmog,
        Self::Frost,
        Self::Glaze,
        Self::Hail,
        Self::Lightning,
        Self::Rain,
        Self::Rainbow,
        Self::Rime,
        Self::Sandstorm,
        Self::Snow,
    ];

    /// Lowercase key used by the classifier and the metadata table
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dew => "dew",
            Self::FogSmog => "fogsmog",
            Self::Frost => "frost",
            Self::Glaze => "glaze",
            Self::Hail => "hail",
            Self::Lightning => "lightning",
            Self::Rain => "rain",
            Self::Rainbow => "rainbow",
            Self::Rime => "rime",
            Self::Sandstorm => "sandstorm",
            Self::Snow => "snow",
        }
    }

    /// Normalize a raw label into a table key
    ///
    /// Trims and lowercases the input. The separated spellings of the
    /// compound `fog/smog` label map to `fogsmog`; nothing else is rewritten.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "fog/smog" | "fog_smog" | "fog-smog" | "fog smog" => Self::FogSmog.key().to_string(),
            _ => key,
        }
    }
}

impl fmt::Display for WeatherLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WeatherLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::normalize(s);
        Self::ALL
            .into_iter()
            .find(|label| label.key() == key)
            .ok_or_else(|| DomainError::UnknownLabel(s.to_string()))
    }
}
