//! linecheck - Result-screen core for inline product quality inspection
//! stations
//!
//! This library provides the deterministic derivation logic behind a
//! post-inspection result screen: score classification, diagnostic checklist
//! generation, display metric derivation, and the screen navigation state
//! machine. The host supplies a measured score and the operator's actions;
//! the core computes what to show and where to go next.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod output;
