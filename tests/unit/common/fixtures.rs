//! Test data builders and fixed port implementations

use chrono::{DateTime, Local, TimeZone};

use linecheck::core::models::Score;
use linecheck::core::ports::{BatchIdProvider, Clock};

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// The instant every presenter test pins to: 2026-03-14 14:45 local
pub fn afternoon_clock() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2026, 3, 14, 14, 45, 0).unwrap())
}

/// A batch source that always hands out the same tag
#[derive(Debug, Clone, Copy)]
pub struct FixedBatches;

impl BatchIdProvider for FixedBatches {
    fn next_batch(&self) -> String {
        "SW-1000".to_string()
    }
}

/// Build a score from a value known to be valid
pub fn score(value: i32) -> Score {
    Score::new(value).unwrap()
}
