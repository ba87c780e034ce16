//! Application initialization.
//!
//! Only the logger needs process-wide setup; everything else is owned by the run.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
