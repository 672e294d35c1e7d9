//! Score classification service
//!
//! Maps a validated score to its status bucket and letter grade. The two
//! ratings are computed independently from the same input; classification
//! happens exactly once and the resulting tagged variant is what the
//! rendering layer branches on.

use crate::core::models::{Classification, Grade, Score, StatusClass};

/// Classify a score into its status class and letter grade
///
/// Pure function: no side effects, no shared state.
#[must_use]
pub fn classify(score: Score) -> Classification {
    Classification {
        status: StatusClass::for_score(score),
        grade: Grade::for_score(score),
    }
}
