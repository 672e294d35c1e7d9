//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human rendering is where
//! the status color tokens live; the core only ever emits the classified
//! status variant.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{DiagnosticItem, Severity, StatusClass};
use crate::core::services::ResultView;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Color the status banner the way the station display does
fn status_banner(status: StatusClass) -> ColoredString {
    match status {
        StatusClass::Passed => status.label().green().bold(),
        StatusClass::Warning => status.label().yellow().bold(),
        StatusClass::Failed => status.label().red().bold(),
    }
}

/// Marker for one checklist line
fn severity_marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::Ok => "ok".green(),
        Severity::Warning => "warn".yellow(),
        Severity::Error => "FAIL".red().bold(),
    }
}

fn render_checklist_lines(items: &[DiagnosticItem]) {
    for item in items {
        let metric = item.metric.as_deref().unwrap_or("-");
        println!("  [{}] {}: {} ({metric})", severity_marker(item.severity), item.label, item.value);
    }
}

impl ResultView {
    /// Render the result screen based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Batch {}  |  {}  {}\n",
            self.batch_number, self.inspected_date, self.inspected_time
        );

        println!("  {}/100   Grade: {}", self.score, self.grade);
        println!("  {}\n", status_banner(self.status));

        println!(
            "Metrics: overall {}  structural {}  visual {}\n",
            self.metrics.overall, self.metrics.structural, self.metrics.visual
        );

        println!("Detailed Analysis:");
        render_checklist_lines(&self.diagnostics);
        println!();

        match self.status {
            StatusClass::Passed => println!("Unit may be approved and packed."),
            StatusClass::Warning | StatusClass::Failed => {
                println!("Send unit for rework before packing.");
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a checklist-only query
#[derive(Debug, Serialize)]
pub struct ChecklistResult {
    /// The measured score
    pub score: u8,
    /// Ordered diagnostic checklist
    pub items: Vec<DiagnosticItem>,
}

impl ChecklistResult {
    /// Render the checklist based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Checklist for score {}:\n", self.score);
        render_checklist_lines(&self.items);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
