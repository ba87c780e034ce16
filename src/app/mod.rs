//! Main application modules.
//!
//! This module provides the filter listing and the end-of-run statistics used by the
//! binary and the run loop.

pub mod filters;
pub mod statistics;

// Re-export public API
pub use filters::print_available_filters;
pub use statistics::print_final_statistics;
