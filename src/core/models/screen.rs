//! Screens and operator actions
//!
//! The navigation flow is a handful of named views and the discrete button
//! presses that move between them. The host owns the current screen; this
//! crate only names the states and actions.

use serde::{Deserialize, Serialize};

use super::Score;

/// A named reachable view in the operator navigation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "screen", content = "score")]
pub enum Screen {
    /// Station dashboard
    Home,
    /// Live scanning view
    Scan,
    /// Post-inspection result screen for the given score
    Result(Score),
    /// Historical reports view; reachable but has no defined behavior yet
    Reports,
}

/// A discrete operator action raised by the rendering layer
///
/// Actions are opaque tokens as far as this crate is concerned: no payload
/// beyond the completed-scan score, no guard conditions. Side effects like
/// the helpline dial or report download are invoked by the host directly and
/// never pass through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "score")]
pub enum UserAction {
    /// Return to the dashboard
    GoHome,
    /// Open the scanning view
    GoScan,
    /// Open the reports view
    GoReports,
    /// A scan finished with the given score
    ScanCompleted(Score),
    /// Approve the unit and pack it
    Approve,
    /// Send the unit for rework
    SendForRework,
    /// Expand checklist details
    ViewDetails,
}
