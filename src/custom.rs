//! Named regex filters loaded from pattern files.
//!
//! A pattern file lives at `<patterns-dir>/<name>.json`:
//!
//! ```json
//! {
//!   "description": "possible xss parameters",
//!   "flags": "-iE",
//!   "patterns": ["q=", "search=", "callback="]
//! }
//! ```
//!
//! `patterns` are OR-joined and take precedence over a single `pattern`. An `i` anywhere in
//! `flags` makes the match case-insensitive; other flag letters are accepted and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::config::{DEFAULT_PATTERNS_SUBDIR, PATTERN_FILE_EXTENSION};
use crate::error_handling::ConfigError;

/// On-disk pattern file format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternFile {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub flags: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl PatternFile {
    /// The effective expression: `(a|b|c)` for a list, otherwise the single pattern.
    pub fn expression(&self) -> Option<String> {
        let patterns: Vec<&str> = self
            .patterns
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        if !patterns.is_empty() {
            return Some(format!("({})", patterns.join("|")));
        }
        self.pattern
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::to_string)
    }

    pub fn case_insensitive(&self) -> bool {
        self.flags.as_deref().is_some_and(|flags| flags.contains('i'))
    }
}

/// A compiled custom filter.
#[derive(Debug, Clone)]
pub struct CustomFilter {
    pub name: String,
    pub description: Option<String>,
    regex: Regex,
}

impl CustomFilter {
    /// Loads `<dir>/<name>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PatternNotFound`] if the file is missing, and the
    /// read/parse/compile variants of [`ConfigError`] for broken files.
    pub fn load(dir: &Path, name: &str) -> Result<Self, ConfigError> {
        let path = pattern_path(dir, name);
        if !path.is_file() {
            return Err(ConfigError::PatternNotFound {
                name: name.to_string(),
                dir: dir.to_path_buf(),
            });
        }
        let file = read_pattern_file(&path)?;
        Self::from_pattern_file(name, file)
    }

    /// Compiles an already-parsed pattern file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPattern`] when the file has no pattern and
    /// [`ConfigError::InvalidPattern`] when the expression does not compile.
    pub fn from_pattern_file(name: &str, file: PatternFile) -> Result<Self, ConfigError> {
        let expression = file
            .expression()
            .ok_or_else(|| ConfigError::EmptyPattern(name.to_string()))?;

        let regex = RegexBuilder::new(&expression)
            .case_insensitive(file.case_insensitive())
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                name: name.to_string(),
                source,
            })?;

        Ok(Self {
            name: name.to_string(),
            description: file.description,
            regex,
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Loads every named filter from `dir`.
///
/// # Errors
///
/// Fails on the first filter that cannot be loaded.
pub fn load_custom_filters<S: AsRef<str>>(
    dir: &Path,
    names: &[S],
) -> Result<Vec<CustomFilter>, ConfigError> {
    names
        .iter()
        .map(|name| CustomFilter::load(dir, name.as_ref()))
        .collect()
}

/// `true` when any filter matches. Filters are OR'd together.
pub fn matches_any(filters: &[CustomFilter], line: &str) -> bool {
    filters.iter().any(|filter| filter.is_match(line))
}

/// Name and description of every pattern file in `dir`, sorted by name.
///
/// A missing directory yields an empty list. Files that fail to parse are listed without
/// a description.
pub fn list_custom_filters(dir: &Path) -> Vec<(String, Option<String>)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("No custom patterns under {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut found: Vec<(String, Option<String>)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == PATTERN_FILE_EXTENSION)
        })
        .filter_map(|path| {
            let name = path.file_stem()?.to_string_lossy().into_owned();
            let description = match read_pattern_file(&path) {
                Ok(file) => file.description.filter(|d| !d.is_empty()),
                Err(e) => {
                    log::warn!("{}", e);
                    None
                }
            };
            Some((name, description))
        })
        .collect();

    found.sort();
    found
}

/// `$HOME/.config/urlsift/patterns`, or a relative path when `HOME` is unset.
pub fn default_patterns_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(DEFAULT_PATTERNS_SUBDIR),
        Err(_) => PathBuf::from(DEFAULT_PATTERNS_SUBDIR),
    }
}

fn pattern_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{PATTERN_FILE_EXTENSION}"))
}

fn read_pattern_file(path: &Path) -> Result<PatternFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::PatternFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::InvalidPatternFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_pattern(dir: &Path, name: &str, json: &str) {
        fs::write(dir.join(format!("{name}.json")), json).unwrap();
    }

    #[test]
    fn test_patterns_are_or_joined() {
        let file = PatternFile {
            patterns: vec!["q=".into(), "search=".into()],
            pattern: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(file.expression().as_deref(), Some("(q=|search=)"));

        let filter = CustomFilter::from_pattern_file("xss", file).unwrap();
        assert!(filter.is_match("https://x.com/?search=a"));
        assert!(!filter.is_match("https://x.com/?id=1"));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let file = PatternFile {
            flags: Some("-iE".into()),
            pattern: Some("aws_secret".into()),
            ..Default::default()
        };
        let filter = CustomFilter::from_pattern_file("aws", file).unwrap();
        assert!(filter.is_match("AWS_SECRET=abc"));

        let strict = PatternFile {
            pattern: Some("aws_secret".into()),
            ..Default::default()
        };
        let filter = CustomFilter::from_pattern_file("aws", strict).unwrap();
        assert!(!filter.is_match("AWS_SECRET=abc"));
    }

    #[test]
    fn test_empty_pattern_is_error() {
        let err = CustomFilter::from_pattern_file("none", PatternFile::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPattern(name) if name == "none"));
    }

    #[test]
    fn test_invalid_regex_is_error() {
        let file = PatternFile {
            pattern: Some("(unclosed".into()),
            ..Default::default()
        };
        let err = CustomFilter::from_pattern_file("bad", file).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        write_pattern(
            dir.path(),
            "redirects",
            r#"{"description": "open redirects", "patterns": ["next=", "url="]}"#,
        );

        let filter = CustomFilter::load(dir.path(), "redirects").unwrap();
        assert_eq!(filter.name, "redirects");
        assert_eq!(filter.description.as_deref(), Some("open redirects"));
        assert!(filter.is_match("https://x.com/login?next=/"));
    }

    #[test]
    fn test_load_missing_pattern() {
        let dir = TempDir::new().unwrap();
        let err = CustomFilter::load(dir.path(), "ghost").unwrap_err();
        assert!(matches!(err, ConfigError::PatternNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        write_pattern(dir.path(), "broken", "{ not json");
        let err = CustomFilter::load(dir.path(), "broken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPatternFile { .. }));
    }

    #[test]
    fn test_list_custom_filters() {
        let dir = TempDir::new().unwrap();
        write_pattern(dir.path(), "xss", r#"{"description": "xss sinks", "pattern": "q="}"#);
        write_pattern(dir.path(), "aws", r#"{"pattern": "AKIA"}"#);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let listed = list_custom_filters(dir.path());
        assert_eq!(
            listed,
            vec![
                ("aws".to_string(), None),
                ("xss".to_string(), Some("xss sinks".to_string())),
            ]
        );
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(list_custom_filters(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn test_matches_any() {
        let dir = TempDir::new().unwrap();
        write_pattern(dir.path(), "a", r#"{"pattern": "alpha"}"#);
        write_pattern(dir.path(), "b", r#"{"pattern": "beta"}"#);
        let filters = load_custom_filters(dir.path(), &["a", "b"]).unwrap();
        assert!(matches_any(&filters, "x beta y"));
        assert!(!matches_any(&filters, "gamma"));
    }
}
