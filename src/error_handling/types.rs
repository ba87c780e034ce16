//! Error type definitions.
//!
//! Configuration and initialization failures are real errors and stop a run before any
//! URL is read. Per-URL rejections are not errors; they are tallied by [`RejectReason`].

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid filter selections, detected once before the batch runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two filters that exclude each other were both requested.
    #[error("Invalid filters provided! {first} and {second} can't be used at the same time")]
    ConflictingFilters {
        first: &'static str,
        second: &'static str,
    },

    /// Both an extension blacklist and a whitelist were given.
    #[error("You can't use blacklist and whitelist at the same time")]
    ExtensionListConflict,

    /// A filter name that is neither built in nor a pattern file.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// No `<name>.json` in the patterns directory.
    #[error("Specified pattern '{name}' doesn't exist under {}", .dir.display())]
    PatternNotFound { name: String, dir: PathBuf },

    /// The pattern file could not be read.
    #[error("Failed to read pattern file {}: {source}", .path.display())]
    PatternFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pattern file is not valid JSON for the pattern format.
    #[error("Invalid pattern file {}: {source}", .path.display())]
    InvalidPatternFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The pattern file has neither `pattern` nor `patterns`.
    #[error("Empty patterns to filter for in '{0}'")]
    EmptyPattern(String),

    /// The pattern does not compile.
    #[error("Invalid regex in pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Why a line was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RejectReason {
    // Input
    Unparsable,
    // Extension checks
    MissingExtension,
    UnwantedExtension,
    BlacklistedExtension,
    NotWhitelisted,
    UselessExtension,
    JsBundle,
    // Content heuristic
    EditorialContent,
    // Parameter filters
    MissingParams,
    UnwantedParams,
    NoInterestingParam,
    DuplicateParams,
    // Shape and key
    DuplicateShape,
    DuplicateKey,
    // Custom pattern selection (outside the engine)
    CustomPatternMismatch,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Unparsable => "Unparsable line",
            RejectReason::MissingExtension => "No extension (hasextension)",
            RejectReason::UnwantedExtension => "Has extension (noextension)",
            RejectReason::BlacklistedExtension => "Blacklisted extension",
            RejectReason::NotWhitelisted => "Extension not whitelisted",
            RejectReason::UselessExtension => "Useless extension",
            RejectReason::JsBundle => "Bundled JavaScript",
            RejectReason::EditorialContent => "Editorial content (nocontent)",
            RejectReason::MissingParams => "No parameters (hasparams)",
            RejectReason::UnwantedParams => "Has parameters (noparams)",
            RejectReason::NoInterestingParam => "No interesting parameter",
            RejectReason::DuplicateParams => "Duplicate parameter signature",
            RejectReason::DuplicateShape => "Duplicate path shape",
            RejectReason::DuplicateKey => "Duplicate URL key",
            RejectReason::CustomPatternMismatch => "Custom pattern mismatch",
        }
    }
}
