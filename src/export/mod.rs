//! Output writers for accepted URLs.
//!
//! URLs are streamed to stdout and an optional TXT mirror as they are accepted; the JSON
//! summary and CSV table are written once the run is complete.

mod csv;
mod json;
mod text;
mod types;

pub use csv::export_csv;
pub use json::write_json_summary;
pub use text::UrlSink;
pub use types::FilterSummary;
