//! Render the full result screen for a measured score

use linecheck::adapters::{EpochBatchIds, SystemClock};
use linecheck::core::models::Score;
use linecheck::core::services::presenter;
use linecheck::output::OutputMode;

/// Run the full derivation pipeline for a score and render the result screen
pub fn inspect(raw_score: i32, mode: OutputMode) -> anyhow::Result<()> {
    let score = Score::new(raw_score)?;
    log::debug!("inspecting unit with score {score}");

    let view = presenter::present(score, &SystemClock, &EpochBatchIds);
    view.render(mode);

    Ok(())
}
