//! Export types.

use serde::{Deserialize, Serialize};

/// JSON envelope written at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    /// Accepted URLs in output order
    pub urls: Vec<String>,
    /// Number of accepted URLs
    pub length: usize,
    /// Filter names the run was started with
    pub filters: Vec<String>,
}

impl FilterSummary {
    pub fn new(urls: Vec<String>, filters: Vec<String>) -> Self {
        Self {
            length: urls.len(),
            urls,
            filters,
        }
    }
}
