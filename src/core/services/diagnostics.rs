//! Diagnostic checklist generation
//!
//! Derives the detailed-analysis checklist shown under the score ring. The
//! five baseline checks always appear, in a fixed order; a warning line and
//! an error line are appended as the score drops below their thresholds.
//! The list is rebuilt from scratch on every call - there is no incremental
//! update and no diffing against a previous result.

use crate::core::models::{DiagnosticItem, Score, Severity};

/// Score below which the non-critical adjustment line appears
const ADJUSTMENT_THRESHOLD: u8 = 95;

/// Score below which the rework defect line appears
const DEFECT_THRESHOLD: u8 = 70;

/// Generate the ordered diagnostic checklist for a score
///
/// Deterministic: equal scores always yield element-wise equal lists.
/// Length is 5 (score >= 95), 6 (70..95), or 7 (below 70).
#[must_use]
pub fn generate(score: Score) -> Vec<DiagnosticItem> {
    let mut items = vec![
        DiagnosticItem::with_metric(
            Severity::Ok,
            "Size Accuracy",
            "Within tolerance",
            "280mm × 80mm",
        ),
        DiagnosticItem::with_metric(
            Severity::Ok,
            "Edge Sealing",
            "Excellent seal",
            "100% integrity",
        ),
        DiagnosticItem::with_metric(
            Severity::Ok,
            "Wing Alignment",
            "Perfectly aligned",
            "±0.5mm variance",
        ),
        DiagnosticItem::with_metric(
            Severity::Ok,
            "Surface Quality",
            "No contamination",
            "Clean surface",
        ),
        DiagnosticItem::with_metric(
            Severity::Ok,
            "Absorbent Core",
            "Core centered",
            "Even distribution",
        ),
    ];

    if score.value() < ADJUSTMENT_THRESHOLD {
        items.push(DiagnosticItem::with_metric(
            Severity::Warning,
            "Minor Adjustment",
            "Trim 2mm from left",
            "Non-critical",
        ));
    }

    if score.value() < DEFECT_THRESHOLD {
        items.push(DiagnosticItem::with_metric(
            Severity::Error,
            "Defect Detected",
            "Seal incomplete",
            "Requires rework",
        ));
    }

    items
}
