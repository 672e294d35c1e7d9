//! Screen navigation
//!
//! A finite-state machine over the operator-facing views. The host owns the
//! current screen and applies the transitions computed here; the machine
//! itself holds no state. Transitions are total: actions without a defined
//! target leave the screen unchanged rather than failing, since swallowing
//! an unknown button press is strictly safer than crashing the interaction.

use crate::core::models::{Screen, UserAction};

/// Compute the next screen for an operator action
///
/// Unconditional transitions, no back-stack, no history. `Approve` returns
/// to the dashboard (approve-and-pack ends the inspection); `SendForRework`
/// and `ViewDetails` have no defined target yet and are explicit no-ops.
#[must_use]
pub const fn transition(current: Screen, action: UserAction) -> Screen {
    match action {
        UserAction::GoHome | UserAction::Approve => Screen::Home,
        UserAction::GoScan => Screen::Scan,
        UserAction::GoReports => Screen::Reports,
        UserAction::ScanCompleted(score) => Screen::Result(score),
        UserAction::SendForRework | UserAction::ViewDetails => current,
    }
}
