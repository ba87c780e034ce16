//! Logger initialization.
//!
//! Logs go to stderr so stdout carries nothing but accepted URLs.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. `use_color` switches ANSI colors on
/// or off for every `colored` string in the process, not only log lines.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Every rejected URL with its reason
/// urlsift -l urls.txt --log-level trace
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=urlsift::filter=debug urlsift -l urls.txt
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    use_color: bool,
) -> Result<(), InitializationError> {
    colored::control::set_override(use_color);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("urlsift", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let (marker, colored_level) = match level {
                    log::Level::Error => ("[-]".red(), level.to_string().red()),
                    log::Level::Warn => ("[!]".yellow(), level.to_string().yellow()),
                    log::Level::Info => ("[+]".green(), level.to_string().green()),
                    log::Level::Debug => ("[*]".blue(), level.to_string().blue()),
                    log::Level::Trace => ("[.]".purple(), level.to_string().purple()),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    marker,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
