//! Percentage value object
//!
//! Display form of a model probability, rounded to one decimal place.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Percentage;
//!
//! let p = Percentage::from_probability(0.853);
//! assert_eq!(p.to_string(), "85.3%");
//! assert!((p.bar_width() - 85.3).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A percentage rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Percentage(f64);

impl Percentage {
    /// Build from a value already expressed in percent (0-100)
    ///
    /// Non-finite input is treated as zero.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if percent.is_finite() {
            Self((percent * 10.0).round() / 10.0)
        } else {
            Self(0.0)
        }
    }

    /// Build from a probability in [0, 1]
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        Self::new(probability * 100.0)
    }

    /// Rounded value in percent
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Width of a proportional bar, clamped to 0-100
    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
