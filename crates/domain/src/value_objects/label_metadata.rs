//! Static presentation metadata for weather labels
//!
//! The table is built once on first access and is read-only afterwards.

use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::Serialize;

use super::WeatherLabel;

/// Symbolic icon glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Cloud,
    CloudRain,
    CloudSnow,
    CloudLightning,
    Sun,
    Wind,
    /// Used by the fallback entry
    Unknown,
}

impl Glyph {
    /// Terminal-friendly emoji for the glyph
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Cloud => "☁️",
            Self::CloudRain => "🌧️",
            Self::CloudSnow => "🌨️",
            Self::CloudLightning => "🌩️",
            Self::Sun => "☀️",
            Self::Wind => "🌪️",
            Self::Unknown => "❓",
        }
    }
}

/// Icon reference: glyph plus a color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub glyph: Glyph,
    pub tone: &'static str,
}

impl Icon {
    const fn new(glyph: Glyph, tone: &'static str) -> Self {
        Self { glyph, tone }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph.emoji())
    }
}

/// Display metadata attached to a weather label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelMetadata {
    pub icon: Icon,
    pub description: &'static str,
    pub tips: &'static str,
}

/// Metadata shown when the classifier returns a label outside the vocabulary
pub const UNKNOWN_CONDITION: LabelMetadata = LabelMetadata {
    icon: Icon::new(Glyph::Unknown, "gray-400"),
    description: "The classifier returned a condition that is not in the known weather vocabulary.",
    tips: "Check the image and try again, or consult a local weather service.",
};

static LABEL_TABLE: LazyLock<HashMap<&'static str, LabelMetadata>> = LazyLock::new(|| {
    WeatherLabel::ALL
        .into_iter()
        .map(|label| (label.key(), metadata_for(label)))
        .collect()
});

const fn metadata_for(label: WeatherLabel) -> LabelMetadata {
    match label {
        WeatherLabel::Dew => LabelMetadata {
            icon: Icon::new(Glyph::Cloud, "blue-400"),
            description: "Tiny water droplets have formed on surfaces due to condensation. This typically occurs in the early morning when the air cools.",
            tips: "Perfect conditions for early morning photography. Watch out for slippery surfaces.",
        },
        WeatherLabel::FogSmog => LabelMetadata {
            icon: Icon::new(Glyph::Cloud, "gray-400"),
            description: "Reduced visibility due to condensed water vapor (fog) or pollution (smog) in the air.",
            tips: "Drive carefully and use fog lights. If smog, consider wearing a mask and limiting outdoor activities.",
        },
        WeatherLabel::Frost => LabelMetadata {
            icon: Icon::new(Glyph::CloudSnow, "blue-200"),
            description: "A thin layer of ice crystals has formed on surfaces when temperatures drop below freezing.",
            tips: "Protect sensitive plants. Be cautious of slippery surfaces, especially in the early morning.",
        },
        WeatherLabel::Glaze => LabelMetadata {
            icon: Icon::new(Glyph::CloudSnow, "blue-300"),
            description: "A smooth coating of ice formed when freezing rain or drizzle hits cold surfaces.",
            tips: "Extremely slippery conditions. Take extra care while walking or driving.",
        },
        WeatherLabel::Hail => LabelMetadata {
            icon: Icon::new(Glyph::CloudSnow, "gray-600"),
            description: "Solid precipitation in the form of balls or lumps of ice.",
            tips: "Seek shelter immediately. Protect vehicles and outdoor equipment if possible.",
        },
        WeatherLabel::Lightning => LabelMetadata {
            icon: Icon::new(Glyph::CloudLightning, "yellow-500"),
            description: "Electrical discharge in the atmosphere, typically during thunderstorms.",
            tips: "Stay indoors. Avoid open areas and tall objects. Unplug electronic devices.",
        },
        WeatherLabel::Rain => LabelMetadata {
            icon: Icon::new(Glyph::CloudRain, "blue-500"),
            description: "Precipitation in the form of water drops falling from clouds.",
            tips: "Carry an umbrella. Be prepared for wet conditions and reduced visibility while driving.",
        },
        WeatherLabel::Rainbow => LabelMetadata {
            icon: Icon::new(Glyph::Sun, "yellow-400"),
            description: "An optical phenomenon occurring when sunlight is reflected and refracted by water droplets.",
            tips: "Great photo opportunity! Look in the direction opposite to the sun for the best view.",
        },
        WeatherLabel::Rime => LabelMetadata {
            icon: Icon::new(Glyph::CloudSnow, "white"),
            description: "A white ice deposit formed when supercooled water droplets freeze upon impact with surfaces.",
            tips: "Beautiful for photography but can be dangerous on roads and power lines.",
        },
        WeatherLabel::Sandstorm => LabelMetadata {
            icon: Icon::new(Glyph::Wind, "orange-400"),
            description: "Strong winds carrying large amounts of sand and dust through the air.",
            tips: "Stay indoors. Wear protective gear if you must go out. Keep windows and doors closed.",
        },
        WeatherLabel::Snow => LabelMetadata {
            icon: Icon::new(Glyph::CloudSnow, "blue-100"),
            description: "Precipitation in the form of small ice crystals.",
            tips: "Dress warmly in layers. Be careful of slippery conditions. Allow extra time for travel.",
        },
    }
}

impl LabelMetadata {
    /// Look up metadata by raw label, case-insensitively
    #[must_use]
    pub fn lookup(raw: &str) -> Option<&'static Self> {
        LABEL_TABLE.get(WeatherLabel::normalize(raw).as_str())
    }

    /// Metadata for a parsed label
    #[must_use]
    pub fn of(label: WeatherLabel) -> &'static Self {
        // Every label is inserted when the table is built
        &LABEL_TABLE[label.key()]
    }
}
