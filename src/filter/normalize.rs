//! URL parsing into the parts the filters work on.

use url::Url;

/// One input URL, decomposed.
///
/// `param_names` holds the distinct, percent-decoded query parameter names in the
/// order they first appear in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub raw: String,
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub raw_query: String,
    pub param_names: Vec<String>,
}

impl ParsedUrl {
    /// Parses a raw input line.
    ///
    /// Returns `None` for blank lines and anything the `url` crate refuses to parse as an
    /// absolute URL. Callers drop those lines without reporting them.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = Url::parse(trimmed).ok()?;

        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        let raw_query = parsed.query().unwrap_or_default().to_string();

        let mut param_names: Vec<String> = Vec::new();
        if !raw_query.is_empty() {
            for (name, _) in parsed.query_pairs() {
                if !param_names.iter().any(|seen| seen == name.as_ref()) {
                    param_names.push(name.into_owned());
                }
            }
        }

        Some(Self {
            raw: trimmed.to_string(),
            scheme: parsed.scheme().to_string(),
            host,
            path: parsed.path().to_string(),
            raw_query,
            param_names,
        })
    }

    pub fn has_query(&self) -> bool {
        !self.raw_query.is_empty()
    }

    /// Lowercased text after the last `.` in the path, or an empty string.
    ///
    /// The whole path is searched, not only the last segment, so `/v1.2/users`
    /// yields `2/users`.
    pub fn extension(&self) -> String {
        match self.path.rfind('.') {
            Some(pos) => self.path[pos + 1..].to_lowercase(),
            None => String::new(),
        }
    }

    /// Last `/`-delimited segment of the path.
    pub fn last_segment(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_url() {
        let parsed = ParsedUrl::parse("https://example.com/index.php?id=1&page=2").unwrap();
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.path, "/index.php");
        assert_eq!(parsed.raw_query, "id=1&page=2");
        assert_eq!(parsed.param_names, vec!["id", "page"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = ParsedUrl::parse("   http://example.com/a  \n").unwrap();
        assert_eq!(parsed.raw, "http://example.com/a");
        assert_eq!(parsed.path, "/a");
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        assert!(ParsedUrl::parse("").is_none());
        assert!(ParsedUrl::parse("   ").is_none());
        assert!(ParsedUrl::parse("not a url at all").is_none());
        assert!(ParsedUrl::parse("/relative/path").is_none());
        assert!(ParsedUrl::parse("http://[::1").is_none());
    }

    #[test]
    fn test_parse_keeps_port_in_host() {
        let parsed = ParsedUrl::parse("http://example.com:8080/admin").unwrap();
        assert_eq!(parsed.host, "example.com:8080");
    }

    #[test]
    fn test_parse_deduplicates_param_names_in_first_seen_order() {
        let parsed = ParsedUrl::parse("http://x.com/a?b=1&a=2&b=3").unwrap();
        assert_eq!(parsed.param_names, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_decodes_param_names() {
        let parsed = ParsedUrl::parse("http://x.com/a?return%5Furl=1").unwrap();
        assert_eq!(parsed.param_names, vec!["return_url"]);
    }

    #[test]
    fn test_empty_query_has_no_params() {
        let parsed = ParsedUrl::parse("http://x.com/a?").unwrap();
        assert!(!parsed.has_query());
        assert!(parsed.param_names.is_empty());
    }

    #[test]
    fn test_extension() {
        let with_ext = ParsedUrl::parse("http://x.com/static/Logo.PNG").unwrap();
        assert_eq!(with_ext.extension(), "png");

        let without = ParsedUrl::parse("http://x.com/api/users").unwrap();
        assert_eq!(without.extension(), "");

        let dotted_dir = ParsedUrl::parse("http://x.com/v1.2/users").unwrap();
        assert_eq!(dotted_dir.extension(), "2/users");
    }

    #[test]
    fn test_last_segment() {
        let parsed = ParsedUrl::parse("http://x.com/js/chunk-7f80.js").unwrap();
        assert_eq!(parsed.last_segment(), "chunk-7f80.js");

        let root = ParsedUrl::parse("http://x.com").unwrap();
        assert_eq!(root.last_segment(), "");
    }
}
