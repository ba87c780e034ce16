//! The `--list-filters` listing.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use strum::IntoEnumIterator;

use crate::config::BuiltinFilter;
use crate::custom::list_custom_filters;

/// Writes the built-in filters and the custom patterns found in `patterns_dir`.
///
/// With `quiet`, only bare names are written, one per line.
pub fn write_available_filters<W: Write>(
    out: &mut W,
    patterns_dir: &Path,
    quiet: bool,
) -> io::Result<()> {
    let custom = list_custom_filters(patterns_dir);

    if quiet {
        for filter in BuiltinFilter::iter() {
            writeln!(out, "{}", filter.as_str())?;
        }
        for (name, _) in &custom {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    writeln!(out, "{}", "Available filters:".magenta())?;
    writeln!(out, "\tDEFAULT:")?;
    for filter in BuiltinFilter::iter() {
        writeln!(out, "\t  {}: {}", filter.as_str(), filter.description())?;
    }
    writeln!(out)?;
    writeln!(out, "\tCUSTOM ({}):", patterns_dir.display())?;
    for (name, description) in &custom {
        match description {
            Some(description) => writeln!(out, "\t  {name}: {description}")?,
            None => writeln!(out, "\t  {name}")?,
        }
    }
    Ok(())
}

/// Prints the listing to stdout.
pub fn print_available_filters(patterns_dir: &Path, quiet: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_available_filters(&mut handle, patterns_dir, quiet)?;
    handle.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_listing_is_bare_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("xss.json"), r#"{"pattern": "q="}"#).unwrap();

        let mut buffer = Vec::new();
        write_available_filters(&mut buffer, dir.path(), true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let names: Vec<&str> = text.lines().collect();
        assert_eq!(
            names,
            vec![
                "vuln",
                "redirect",
                "hasparams",
                "noparams",
                "hasextension",
                "noextension",
                "nocontent",
                "xss"
            ]
        );
    }

    #[test]
    fn test_full_listing_has_descriptions() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("aws.json"),
            r#"{"description": "aws keys", "pattern": "AKIA"}"#,
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_available_filters(&mut buffer, dir.path(), false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Available filters:"));
        assert!(text.contains("\t  nocontent: exclude urls"));
        assert!(text.contains("\t  aws: aws keys"));
    }
}
