//! Wall-clock port
//!
//! The result screen shows the inspection date and time, but wall-clock
//! reads are a side effect the core must not own. Implementations live in
//! the `adapters` module; tests supply a fixed instant.

use chrono::{DateTime, Local};

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Local>;
}
