//! Path shapes: paths with numeric segments generalized to `\d+`.
//!
//! `/blog/page/11/index.html` and `/blog/page/97/index.html` share the shape
//! `/blog/page/\d+/index\.html`. The registry remembers every shape seen during a run
//! so numbered duplicates of an earlier path can be dropped.

use std::collections::HashSet;

use regex::Regex;

/// Wildcard substituted for purely numeric segments.
pub const NUMERIC_WILDCARD: &str = r"\d+";

/// Converts a path into its regex-safe shape.
pub fn shape_of(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if is_numeric_segment(segment) {
                NUMERIC_WILDCARD.to_string()
            } else {
                regex::escape(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Ordered set of shapes observed so far. Only grows.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    shapes: Vec<String>,
    index: HashSet<String>,
    compiled: Vec<Regex>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, shape: &str) -> bool {
        self.index.contains(shape)
    }

    /// Registers `shape`. Returns `false` if it was already present.
    pub fn register(&mut self, shape: &str) -> bool {
        if self.index.contains(shape) {
            return false;
        }
        // Escaped segments and `\d+` always form a valid pattern.
        match Regex::new(&format!("^{shape}$")) {
            Ok(re) => self.compiled.push(re),
            Err(e) => log::warn!("Could not compile path shape {shape}: {e}"),
        }
        self.index.insert(shape.to_string());
        self.shapes.push(shape.to_string());
        true
    }

    /// Returns `true` if the literal `path` fits any registered shape.
    ///
    /// The path's own shape is checked by hash first; the compiled patterns are only
    /// scanned when that misses.
    pub fn matches_any(&self, path: &str) -> bool {
        if self.index.contains(&shape_of(path)) {
            return true;
        }
        self.compiled.iter().any(|re| re.is_match(path))
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
