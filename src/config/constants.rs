//! Configuration constants.
//!
//! This module defines the constants used throughout the application: input handling,
//! pattern file lookup and output formatting.

/// Input path that means "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Capacity of the channel between the input reader task and the filter engine.
///
/// Large enough to keep the reader ahead of the engine without buffering whole
/// archive dumps in memory.
pub const INPUT_CHANNEL_CAPACITY: usize = 4096;

/// Lines starting with this prefix are treated as comments and skipped.
pub const COMMENT_PREFIX: char = '#';

/// Directory (relative to `$HOME`) holding custom pattern files.
pub const DEFAULT_PATTERNS_SUBDIR: &str = ".config/urlsift/patterns";

/// File extension of custom pattern files.
pub const PATTERN_FILE_EXTENSION: &str = "json";

/// Header row of the CSV output.
pub const CSV_HEADERS: [&str; 2] = ["urls", "filters"];

/// Separator used to join filter names in a CSV row.
pub const CSV_FILTER_SEPARATOR: &str = "-";
