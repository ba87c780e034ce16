//! Error handling and filtering statistics.
//!
//! This module provides:
//! - Configuration and initialization error types
//! - The rejection taxonomy for lines left out of the output
//! - Thread-safe per-reason counters

mod stats;
mod types;

// Re-export public API
pub use stats::FilterStats;
pub use types::{ConfigError, InitializationError, RejectReason};
