//! Batch identity port
//!
//! The result screen labels each inspection with a batch tag. Tag generation
//! is a host concern with no behavioral contract, so the core receives tags
//! through this trait rather than generating them. Implementations live in
//! the `adapters` module; tests supply fixed tags.

/// Source of display batch tags
pub trait BatchIdProvider: Send + Sync {
    /// The batch tag for the next inspection (e.g., "SW-4821")
    fn next_batch(&self) -> String;
}
