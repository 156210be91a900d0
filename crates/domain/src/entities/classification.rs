//! Classification result returned by the weather image classifier
//!
//! Field names follow the classifier's JSON payload; the alternate
//! camel-case and descriptive names are accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Percentage, WeatherLabel};

/// One ranked prediction from the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Predicted label
    #[serde(rename = "class", alias = "label")]
    pub label: String,
    /// Score in percent (0-100)
    pub percentage: f64,
}

impl Alternative {
    /// Create an alternative prediction
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }

    /// Score rounded for display
    #[must_use]
    pub fn rounded(&self) -> Percentage {
        Percentage::new(self.percentage)
    }
}

/// Result of classifying a single image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Top predicted label, matched case-insensitively
    #[serde(default, alias = "predictedClass")]
    pub predicted_class: Option<String>,
    /// Probability of the top label in [0, 1]
    #[serde(default, rename = "prediction", alias = "confidence")]
    pub confidence: f64,
    /// Ranked predictions; index 0 repeats the top label
    #[serde(
        default,
        rename = "top_predictions",
        alias = "alternatives",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternatives: Option<Vec<Alternative>>,
}

impl ClassificationResult {
    /// Create a result with a label and confidence
    pub fn new(predicted_class: impl Into<String>, confidence: f64) -> Self {
        Self {
            predicted_class: Some(predicted_class.into()),
            confidence,
            alternatives: None,
        }
    }

    /// Attach ranked alternatives
    #[must_use]
    pub fn with_alternatives(mut self, alternatives: Vec<Alternative>) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    /// The predicted class, if present and not blank
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.predicted_class
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse the predicted class into the known vocabulary
    #[must_use]
    pub fn weather_label(&self) -> Option<WeatherLabel> {
        self.label().and_then(|s| s.parse().ok())
    }

    /// Confidence rounded for display
    #[must_use]
    pub fn confidence_percent(&self) -> Percentage {
        Percentage::from_probability(self.confidence)
    }
}
