//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//! the system wall clock and the batch tag source. The core never
//! touches these directly - it sees only the traits in `core::ports`.

mod system;

pub use system::{EpochBatchIds, SystemClock};
