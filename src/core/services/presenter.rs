//! Result view assembly
//!
//! Packages the three independent derivations (classification, checklist,
//! display metrics) together with host-supplied identity and time into the
//! single view model the rendering layer consumes. Status is classified
//! exactly once here; everything downstream branches on the tagged variant
//! instead of re-deriving it.

use serde::{Deserialize, Serialize};

use crate::core::models::{Classification, DiagnosticItem, Grade, Score, StatusClass};
use crate::core::ports::{BatchIdProvider, Clock};
use crate::core::services::metrics::DisplayMetrics;
use crate::core::services::{classifier, diagnostics, metrics};

/// Everything the rendering layer needs to draw the result screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    /// Display batch tag (e.g., "SW-4821")
    pub batch_number: String,

    /// Inspection date, short format (e.g., "4 Aug 2026")
    pub inspected_date: String,

    /// Inspection time, 12-hour format (e.g., "02:45 PM")
    pub inspected_time: String,

    /// The measured score
    pub score: Score,

    /// Pass/warn/fail bucket
    pub status: StatusClass,

    /// Letter grade
    pub grade: Grade,

    /// Secondary progress indicators
    pub metrics: DisplayMetrics,

    /// Ordered diagnostic checklist
    pub diagnostics: Vec<DiagnosticItem>,
}

/// Assemble the result view for a completed inspection
///
/// The three derivations are independent computations over the same score;
/// batch tag and timestamps come from the injected providers so the view is
/// fully deterministic under test.
#[must_use]
pub fn present(score: Score, clock: &dyn Clock, batches: &dyn BatchIdProvider) -> ResultView {
    let Classification { status, grade } = classifier::classify(score);
    let now = clock.now();

    ResultView {
        batch_number: batches.next_batch(),
        inspected_date: now.format("%-d %b %Y").to_string(),
        inspected_time: now.format("%I:%M %p").to_string(),
        score,
        status,
        grade,
        metrics: metrics::derive_metrics(score),
        diagnostics: diagnostics::generate(score),
    }
}
