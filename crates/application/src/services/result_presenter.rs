//! Result presenter - Classification result to display card
//!
//! Resolves the predicted label against the static metadata table and
//! formats confidence and alternative predictions for display. Pure: the
//! only side effect is a warning log when an unknown label falls back.

use std::fmt;

use domain::{
    Alternative, ClassificationResult, Icon, LabelMetadata, Percentage,
    UNKNOWN_CONDITION, WeatherLabel,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a result could not be presented from the table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentError {
    /// The predicted class is not part of the label vocabulary
    #[error("Unrecognized prediction: {0}")]
    UnrecognizedLabel(String),
}

/// One entry of the "Other Possibilities" section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PossibilityLine {
    pub label: String,
    pub percentage: Percentage,
}

impl fmt::Display for PossibilityLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.percentage)
    }
}

impl From<&Alternative> for PossibilityLine {
    fn from(alt: &Alternative) -> Self {
        Self {
            label: alt.label.clone(),
            percentage: alt.rounded(),
        }
    }
}

/// Render tree for a single classification result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    /// Heading, e.g. "Rain Detected"
    pub title: String,
    /// Resolved label; `None` when the fallback entry was used
    pub label: Option<WeatherLabel>,
    pub icon: Icon,
    pub confidence: Percentage,
    pub description: &'static str,
    pub tips: &'static str,
    /// Present whenever the result carried alternatives, even if only the
    /// top prediction was listed
    pub other_possibilities: Option<Vec<PossibilityLine>>,
}

impl ResultCard {
    /// Whether the card was built from the fallback entry
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.label.is_none()
    }

    /// Confidence text as shown next to the bar, e.g. "85.3%"
    #[must_use]
    pub fn confidence_text(&self) -> String {
        self.confidence.to_string()
    }
}

/// Builds [`ResultCard`]s from classifier output
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPresenter;

impl ResultPresenter {
    /// Create a presenter
    pub const fn new() -> Self {
        Self
    }

    /// Present a result, degrading gracefully
    ///
    /// Returns `None` when there is no prediction. An unrecognized label
    /// renders the "unknown condition" card instead of failing.
    pub fn present(&self, result: Option<&ClassificationResult>) -> Option<ResultCard> {
        match self.try_present(result) {
            Ok(card) => card,
            Err(PresentError::UnrecognizedLabel(label)) => {
                warn!(label = %label, "Unrecognized prediction, rendering fallback card");
                result.map(|r| Self::build(r, &label, None, &UNKNOWN_CONDITION))
            },
        }
    }

    /// Present a result, reporting unknown labels as errors
    ///
    /// `Ok(None)` means there was no prediction to show.
    pub fn try_present(
        &self,
        result: Option<&ClassificationResult>,
    ) -> Result<Option<ResultCard>, PresentError> {
        let Some(result) = result else {
            return Ok(None);
        };
        let Some(raw) = result.label() else {
            debug!("No predicted class, nothing to present");
            return Ok(None);
        };

        let label = raw
            .parse::<WeatherLabel>()
            .map_err(|_| PresentError::UnrecognizedLabel(raw.to_string()))?;

        Ok(Some(Self::build(
            result,
            raw,
            Some(label),
            LabelMetadata::of(label),
        )))
    }

    fn build(
        result: &ClassificationResult,
        raw: &str,
        label: Option<WeatherLabel>,
        meta: &LabelMetadata,
    ) -> ResultCard {
        // Index 0 restates the top prediction
        let other_possibilities = result
            .alternatives
            .as_ref()
            .map(|alts| alts.iter().skip(1).map(PossibilityLine::from).collect());

        ResultCard {
            title: format!("{} Detected", capitalize_words(raw)),
            label,
            icon: meta.icon,
            confidence: result.confidence_percent(),
            description: meta.description,
            tips: meta.tips,
            other_possibilities,
        }
    }
}

/// Uppercase the first letter of every whitespace-separated word
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
