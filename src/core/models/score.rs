//! Validated quality score
//!
//! A `Score` is the single input to every derivation in this crate. The
//! measurement subsystem upstream is expected to deliver values in [0,100],
//! but that expectation is enforced here rather than trusted: out-of-range
//! values are rejected, never clamped, so a faulty sensor surfaces as an
//! error instead of a plausible-looking result screen.
//!
//! # Examples
//!
//! ```
//! use linecheck::core::models::Score;
//!
//! let score = Score::new(82).unwrap();
//! assert_eq!(score.value(), 82);
//!
//! assert!(Score::new(101).is_err());
//! assert!(Score::new(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a raw score lies outside [0,100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid score {value}: must be between 0 and 100")]
pub struct InvalidScoreError {
    /// The rejected raw value
    pub value: i32,
}

/// A quality measurement in [0,100] for one inspected unit
///
/// Construction is the only place the range is checked; everything downstream
/// operates on an already-valid value. Deserialization runs through the same
/// check, so a stored or wire value cannot smuggle in an invalid score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32")]
pub struct Score(u8);

impl Score {
    /// Validate a raw measurement into a `Score`
    pub fn new(value: i32) -> Result<Self, InvalidScoreError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(InvalidScoreError { value })
    }

    /// The measured value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = InvalidScoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
