//! Final acceptance keys and the https-over-http preference.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// How the registry treats a key it has already accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// Keys are recorded. A repeated key is dropped unless it upgrades an `http`
    /// representative to `https`, in which case the https URL is appended as well.
    #[default]
    SchemeUpgrade,
    /// Keys are never recorded, so every URL reaching the registry is appended.
    Literal,
}

/// Outcome of offering a URL to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    /// First URL for this key.
    New,
    /// An https URL for a key whose representative was http.
    Upgrade,
    /// The key is taken and the URL adds nothing.
    Duplicate,
}

impl KeyDecision {
    pub fn is_accepted(self) -> bool {
        !matches!(self, KeyDecision::Duplicate)
    }
}

/// Map from `host+path[?signature]` to the representative URL.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    mode: DedupMode,
    representatives: HashMap<String, String>,
}

impl DedupRegistry {
    pub fn new(mode: DedupMode) -> Self {
        Self {
            mode,
            representatives: HashMap::new(),
        }
    }

    pub fn offer(&mut self, key: &str, scheme: &str, url: &str) -> KeyDecision {
        if self.mode == DedupMode::Literal {
            return KeyDecision::New;
        }

        match self.representatives.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                KeyDecision::New
            }
            Entry::Occupied(mut slot) => {
                if scheme == "https" && slot.get().starts_with("http:") {
                    slot.insert(url.to_string());
                    KeyDecision::Upgrade
                } else {
                    KeyDecision::Duplicate
                }
            }
        }
    }

    pub fn representative(&self, key: &str) -> Option<&str> {
        self.representatives.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }
}

/// Builds the acceptance key for a URL.
pub fn dedup_key(host: &str, path: &str, signature: Option<&[String]>) -> String {
    match signature {
        Some(names) => format!("{host}{path}?{}", names.join("&")),
        None => format!("{host}{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_signature() {
        assert_eq!(dedup_key("x.com", "/a", None), "x.com/a");
    }

    #[test]
    fn test_key_with_signature() {
        let sig = vec!["id".to_string(), "page".to_string()];
        assert_eq!(dedup_key("x.com", "/a", Some(&sig)), "x.com/a?id&page");
    }

    #[test]
    fn test_first_url_is_new() {
        let mut registry = DedupRegistry::new(DedupMode::SchemeUpgrade);
        assert_eq!(
            registry.offer("x.com/a", "http", "http://x.com/a"),
            KeyDecision::New
        );
        assert_eq!(registry.representative("x.com/a"), Some("http://x.com/a"));
    }

    #[test]
    fn test_https_upgrades_http() {
        let mut registry = DedupRegistry::new(DedupMode::SchemeUpgrade);
        registry.offer("x.com/a", "http", "http://x.com/a");
        assert_eq!(
            registry.offer("x.com/a", "https", "https://x.com/a"),
            KeyDecision::Upgrade
        );
        assert_eq!(registry.representative("x.com/a"), Some("https://x.com/a"));
        // a second https variant has nothing left to upgrade
        assert_eq!(
            registry.offer("x.com/a", "https", "https://x.com/a"),
            KeyDecision::Duplicate
        );
    }

    #[test]
    fn test_http_after_https_is_duplicate() {
        let mut registry = DedupRegistry::new(DedupMode::SchemeUpgrade);
        registry.offer("x.com/a", "https", "https://x.com/a");
        assert_eq!(
            registry.offer("x.com/a", "http", "http://x.com/a"),
            KeyDecision::Duplicate
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_literal_mode_never_records() {
        let mut registry = DedupRegistry::new(DedupMode::Literal);
        assert_eq!(
            registry.offer("x.com/a", "http", "http://x.com/a"),
            KeyDecision::New
        );
        assert_eq!(
            registry.offer("x.com/a", "http", "http://x.com/a"),
            KeyDecision::New
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_decision_acceptance() {
        assert!(KeyDecision::New.is_accepted());
        assert!(KeyDecision::Upgrade.is_accepted());
        assert!(!KeyDecision::Duplicate.is_accepted());
    }
}
