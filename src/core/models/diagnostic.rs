//! Diagnostic checklist line
//!
//! One entry in the detailed-analysis panel of the result screen: a named
//! inspection attribute, its outcome, and an optional measured detail.

use serde::{Deserialize, Serialize};

/// Outcome severity of a single checklist line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Check passed, nothing to do
    Ok,
    /// Non-critical finding, unit can still be approved
    Warning,
    /// Defect requiring rework
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid severity: {s}. Use: ok, warning, error")),
        }
    }
}

/// One line of the diagnostic checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    /// Outcome severity
    pub severity: Severity,

    /// Inspected attribute (e.g., "Edge Sealing")
    pub label: String,

    /// Outcome description (e.g., "Excellent seal")
    pub value: String,

    /// Optional measured detail (e.g., "±0.5mm variance")
    pub metric: Option<String>,
}

impl DiagnosticItem {
    /// Create a checklist line with a measured detail
    pub fn with_metric(
        severity: Severity,
        label: impl Into<String>,
        value: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            label: label.into(),
            value: value.into(),
            metric: Some(metric.into()),
        }
    }
}
