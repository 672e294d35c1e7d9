//! Display metric derivation
//!
//! The secondary progress indicators on the result screen. These sub-scores
//! have no independent meaning - they are fixed offsets of the overall score,
//! clamped to the [0,100] display range.

use serde::{Deserialize, Serialize};

use crate::core::models::Score;

/// Sub-scores for the secondary progress indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// The overall score, unchanged
    pub overall: u8,
    /// Structural sub-score, `min(score + 3, 100)`
    pub structural: u8,
    /// Visual sub-score, `max(score - 2, 0)`
    pub visual: u8,
}

/// Derive the display metrics for a score
#[must_use]
pub fn derive_metrics(score: Score) -> DisplayMetrics {
    let value = score.value();
    DisplayMetrics {
        overall: value,
        structural: (value + 3).min(100),
        visual: value.saturating_sub(2),
    }
}
