//! Turn identifier pairing a user message with its reply

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequence number of a chat turn within one transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TurnId(u64);

impl TurnId {
    /// The first turn of a transcript
    pub const FIRST: Self = Self(1);

    /// Create a turn ID from a raw sequence number
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// The turn following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw sequence number
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
