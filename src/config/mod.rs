//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (input handling, pattern lookup, output format)
//! - Filter selection and validation
//! - CLI option types and parsing

mod constants;
mod filters;
mod types;

// Re-export all constants
pub use constants::*;
pub use filters::{normalize_extension, parse_extension_list, BuiltinFilter, FilterConfig};
pub use types::{Config, LogFormat, LogLevel, Opt};
