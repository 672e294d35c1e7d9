//! Render the diagnostic checklist for a measured score

use linecheck::core::models::Score;
use linecheck::core::services::diagnostics;
use linecheck::output::{ChecklistResult, OutputMode};

/// Generate and render the diagnostic checklist only
pub fn checklist(raw_score: i32, mode: OutputMode) -> anyhow::Result<()> {
    let score = Score::new(raw_score)?;

    let result = ChecklistResult {
        score: score.value(),
        items: diagnostics::generate(score),
    };
    result.render(mode);

    Ok(())
}
