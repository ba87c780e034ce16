//! JSON summary export.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::FilterSummary;

/// Writes `summary` as a single JSON object to `path`.
pub fn write_json_summary(path: &Path, summary: &FilterSummary) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, summary).context("Failed to serialize JSON summary")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(())
}
