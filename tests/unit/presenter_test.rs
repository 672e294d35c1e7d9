//! Tests for result view assembly
//!
//! The presenter is the one place the three derivations meet the injected
//! clock and batch identity, so these tests pin both and assert on the
//! assembled view model.

use crate::common::fixtures::{FixedBatches, afternoon_clock, score};
use linecheck::core::models::{Grade, Severity, StatusClass};
use linecheck::core::services::presenter;

#[test]
fn passed_unit_view() {
    let view = presenter::present(score(82), &afternoon_clock(), &FixedBatches);

    assert_eq!(view.batch_number, "SW-1000");
    assert_eq!(view.inspected_date, "14 Mar 2026");
    assert_eq!(view.inspected_time, "02:45 PM");
    assert_eq!(view.score.value(), 82);
    assert_eq!(view.status, StatusClass::Passed);
    assert_eq!(view.grade, Grade::B);
    assert_eq!(view.metrics.overall, 82);
    assert_eq!(view.metrics.structural, 85);
    assert_eq!(view.metrics.visual, 80);
    assert_eq!(view.diagnostics.len(), 6);
}

#[test]
fn failed_unit_view_has_full_checklist() {
    let view = presenter::present(score(50), &afternoon_clock(), &FixedBatches);

    assert_eq!(view.status, StatusClass::Failed);
    assert_eq!(view.grade, Grade::D);
    assert_eq!(view.diagnostics.len(), 7);
    assert_eq!(view.diagnostics[5].severity, Severity::Warning);
    assert_eq!(view.diagnostics[6].severity, Severity::Error);
}

#[test]
fn perfect_unit_view_is_baseline_only() {
    let view = presenter::present(score(100), &afternoon_clock(), &FixedBatches);

    assert_eq!(view.status, StatusClass::Passed);
    assert_eq!(view.grade, Grade::APlus);
    assert_eq!(view.diagnostics.len(), 5);
    assert!(view.diagnostics.iter().all(|i| i.severity == Severity::Ok));
}

#[test]
fn view_serializes_to_json() {
    let view = presenter::present(score(96), &afternoon_clock(), &FixedBatches);
    let json = serde_json::to_string(&view).unwrap();

    assert!(json.contains("\"batch_number\":\"SW-1000\""));
    assert!(json.contains("\"score\":96"));
    assert!(json.contains("\"status\":\"passed\""));
    assert!(json.contains("\"grade\":\"A+\""));
    assert!(json.contains("\"structural\":99"));
}

#[test]
fn repeated_presentation_is_stable() {
    let a = presenter::present(score(67), &afternoon_clock(), &FixedBatches);
    let b = presenter::present(score(67), &afternoon_clock(), &FixedBatches);

    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}
