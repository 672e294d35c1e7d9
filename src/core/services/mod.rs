//! Business logic services
//!
//! Pure derivation logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`classifier`] - Status class and letter grade for a score
//! - [`diagnostics`] - Ordered diagnostic checklist for a score
//! - [`metrics`] - Secondary display metrics for a score
//! - [`navigation`] - Screen transitions for operator actions
//! - [`presenter`] - Result view assembly from the derivations above

pub mod classifier;
pub mod diagnostics;
pub mod metrics;
pub mod navigation;
pub mod presenter;

pub use classifier::classify;
pub use diagnostics::generate;
pub use metrics::{DisplayMetrics, derive_metrics};
pub use navigation::transition;
pub use presenter::{ResultView, present};
