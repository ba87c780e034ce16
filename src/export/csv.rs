//! CSV export functionality.
//!
//! One row per accepted URL, with the run's filter names joined by `-` in the second
//! column.

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::{CSV_FILTER_SEPARATOR, CSV_HEADERS};

/// Writes the CSV table to `path`.
///
/// # Returns
///
/// Returns the number of rows written, excluding the header.
pub fn export_csv(path: &Path, urls: &[String], filters: &[String]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV output file: {}", path.display()))?;
    write_csv(Writer::from_writer(file), urls, filters)
}

fn write_csv<W: Write>(mut writer: Writer<W>, urls: &[String], filters: &[String]) -> Result<usize> {
    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    let joined = filters.join(CSV_FILTER_SEPARATOR);
    for url in urls {
        writer
            .write_record([url.as_str(), joined.as_str()])
            .context("Failed to write CSV row")?;
    }

    writer.flush()?;
    Ok(urls.len())
}
