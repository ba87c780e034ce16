// Shared test helpers for input files and run configuration.

use std::path::{Path, PathBuf};

use urlsift::{Config, LogLevel};

/// Writes `lines` to `<dir>/<name>`, one per line, and returns the path.
pub fn write_input(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}

/// A config reading `input` that prints nothing to stdout.
#[allow(dead_code)] // Not every test file uses it
pub fn file_config(input: PathBuf) -> Config {
    Config {
        input,
        echo_stdout: false,
        log_level: LogLevel::Error,
        ..Default::default()
    }
}
