//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::STDIN_PATH;
use crate::config::filters::{parse_extension_list, BuiltinFilter, FilterConfig};
use crate::error_handling::ConfigError;
use crate::filter::{DedupMode, LedgerMode};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace (every rejected URL)
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format (colored with `--color`)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use urlsift::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("urls.txt"),
///     filters: vec!["hasparams".to_string(), "nocontent".to_string()],
///     output_json: Some(PathBuf::from("urls.json")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URLs from (`-` for stdin)
    pub input: PathBuf,

    /// Filter names: built-in filters or custom pattern names
    pub filters: Vec<String>,

    /// Extensions to drop in addition to the built-in set
    pub blacklist: Vec<String>,

    /// Extensions to keep; everything else with an extension is dropped
    pub whitelist: Vec<String>,

    /// Replace parameter values in accepted URLs with this placeholder
    pub param_placeholder: Option<String>,

    /// Print accepted URLs to stdout as they are found
    pub echo_stdout: bool,

    /// Mirror accepted URLs into this text file
    pub output: Option<PathBuf>,

    /// Write a JSON summary to this file
    pub output_json: Option<PathBuf>,

    /// Write a CSV table to this file
    pub output_csv: Option<PathBuf>,

    /// Only print results (no run summary)
    pub quiet: bool,

    /// Colored terminal output
    pub color: bool,

    /// Directory holding custom pattern files
    pub patterns_dir: Option<PathBuf>,

    /// Compare parameter signatures exactly instead of by the loose heuristic
    pub strict_params: bool,

    /// Keep every URL that survives the pattern step, without key deduplication
    pub literal_dedup: bool,

    /// Keep bundled JavaScript (`chunk-*`, `app.*`, `*.min.js`)
    pub keep_js_bundles: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(STDIN_PATH),
            filters: Vec::new(),
            blacklist: Vec::new(),
            whitelist: Vec::new(),
            param_placeholder: None,
            echo_stdout: true,
            output: None,
            output_json: None,
            output_csv: None,
            quiet: false,
            color: false,
            patterns_dir: None,
            strict_params: false,
            literal_dedup: false,
            keep_js_bundles: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Whether URLs are read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }

    /// Whether the end-of-run summary is logged. Quiet runs print results only.
    pub fn reports_summary(&self) -> bool {
        !self.quiet
    }

    /// Filter names that are not built in, i.e. custom pattern names.
    pub fn custom_filter_names(&self) -> Vec<&str> {
        self.filters
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty() && BuiltinFilter::from_name(name).is_none())
            .collect()
    }

    /// Builds the engine configuration from the built-in filter names and flags.
    ///
    /// Custom pattern names are skipped here; see [`Config::custom_filter_names`].
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`FilterConfig::validate`].
    pub fn filter_config(&self) -> Result<FilterConfig, ConfigError> {
        let mut filter_config = FilterConfig {
            blacklist: self.blacklist.clone(),
            whitelist: self.whitelist.clone(),
            drop_js_bundles: !self.keep_js_bundles,
            ledger_mode: if self.strict_params {
                LedgerMode::Strict
            } else {
                LedgerMode::Loose
            },
            dedup_mode: if self.literal_dedup {
                DedupMode::Literal
            } else {
                DedupMode::SchemeUpgrade
            },
            param_placeholder: self.param_placeholder.clone(),
            ..Default::default()
        };

        for name in &self.filters {
            if let Some(filter) = BuiltinFilter::from_name(name) {
                filter_config.enable(filter);
            }
        }

        filter_config.validate()?;
        Ok(filter_config)
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Read from stdin, keep only urls with parameters
/// cat urls.txt | urlsift -f hasparams
///
/// # Vulnerable parameters, values replaced, JSON summary
/// urlsift -l urls.txt -f vuln,nocontent -p FUZZ --output-json out.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "urlsift",
    version,
    about = "Reduces a noisy list of URLs to a small, representative, security-relevant set."
)]
pub struct Opt {
    /// File with one URL per line (`-` for stdin)
    #[arg(short = 'l', long = "list", value_parser, default_value = STDIN_PATH)]
    pub list: PathBuf,

    /// Comma separated filters (vuln, redirect, hasparams, noparams, hasextension,
    /// noextension, nocontent) or custom pattern names
    #[arg(short = 'f', long = "filter", value_delimiter = ',')]
    pub filters: Vec<String>,

    /// Comma separated extensions to drop (i.e. php,asp)
    #[arg(short = 'b', long)]
    pub blacklist: Option<String>,

    /// Comma separated extensions to keep (i.e. php,json)
    #[arg(short = 'w', long)]
    pub whitelist: Option<String>,

    /// Replace parameter values with this placeholder (i.e. FUZZ)
    #[arg(short = 'p', long = "params")]
    pub params: Option<String>,

    /// Write accepted URLs to this file as well
    #[arg(short = 'o', long, value_parser)]
    pub output: Option<PathBuf>,

    /// Write a JSON summary to this file
    #[arg(long, value_parser)]
    pub output_json: Option<PathBuf>,

    /// Write a CSV table to this file
    #[arg(long, value_parser)]
    pub output_csv: Option<PathBuf>,

    /// Print neither summary nor logging, only results
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print colors on output
    #[arg(short = 'c', long)]
    pub color: bool,

    /// List built-in filters and custom patterns, then exit
    #[arg(long)]
    pub list_filters: bool,

    /// Directory holding custom pattern files (default: ~/.config/urlsift/patterns)
    #[arg(long, value_parser)]
    pub patterns_dir: Option<PathBuf>,

    /// Treat parameter signatures as equal only when their sorted names match
    #[arg(long)]
    pub strict_params: bool,

    /// Disable key deduplication after the pattern step
    #[arg(long)]
    pub literal_dedup: bool,

    /// Keep bundled JavaScript files (chunk-*, app.*, *.min.js)
    #[arg(long)]
    pub keep_js_bundles: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        // Quiet keeps errors visible and silences everything else.
        let log_level = if opt.quiet {
            LogLevel::Error
        } else {
            opt.log_level
        };

        Self {
            input: opt.list,
            filters: opt
                .filters
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            blacklist: opt
                .blacklist
                .as_deref()
                .map(parse_extension_list)
                .unwrap_or_default(),
            whitelist: opt
                .whitelist
                .as_deref()
                .map(parse_extension_list)
                .unwrap_or_default(),
            param_placeholder: opt.params,
            echo_stdout: true,
            output: opt.output,
            output_json: opt.output_json,
            output_csv: opt.output_csv,
            quiet: opt.quiet,
            color: opt.color,
            patterns_dir: opt.patterns_dir,
            strict_params: opt.strict_params,
            literal_dedup: opt.literal_dedup,
            keep_js_bundles: opt.keep_js_bundles,
            log_level,
            log_format: opt.log_format,
        }
    }
}
