//! System implementations of the core ports
//!
//! The real wall clock and a time-derived batch tag source. Both are thin:
//! everything with a behavioral contract lives behind the port traits in
//! `core::ports`.

use chrono::{DateTime, Local};

use crate::core::ports::{BatchIdProvider, Clock};

/// Wall clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Batch tags derived from the epoch clock
///
/// Produces `SW-NNNN` with the four digits in 1000..=9999, matching the
/// station's label format. Tags are display identifiers only; nothing in the
/// core depends on their uniqueness or ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochBatchIds;

impl BatchIdProvider for EpochBatchIds {
    fn next_batch(&self) -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ms = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        format!("SW-{}", 1000 + (ms % 9000))
    }
}
