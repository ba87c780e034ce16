//! The URL reduction engine.
//!
//! [`FilterEngine`] runs every input line through a fixed sequence of checks:
//!
//! 1. extension rules (useless set, blacklist/whitelist, `hasextension`/`noextension`)
//! 2. the editorial content heuristic (`nocontent`)
//! 3. parameter filters (`hasparams`/`noparams`, then the `vuln`/`redirect` dictionaries and
//!    the parameter ledger)
//! 4. path shape generalization
//! 5. the final key lookup, with the https-over-http preference
//!
//! The engine is a single greedy pass. Output order follows input order, and the same
//! input with the same configuration always yields the same output.

mod content;
mod dedup;
mod extension;
mod normalize;
mod params;
mod pattern;

use std::sync::Arc;

use log::{debug, trace};

use crate::config::FilterConfig;
use crate::error_handling::{ConfigError, FilterStats, RejectReason};

pub use content::{is_editorial_path, EDITORIAL_WORDS};
pub use dedup::{dedup_key, DedupMode, DedupRegistry, KeyDecision};
pub use extension::{ExtensionClassifier, USELESS_EXTENSIONS};
pub use normalize::ParsedUrl;
pub use params::{signature, LedgerMode, ParamFocus, ParamLedger, REDIRECT_PARAMS, VULN_PARAMS};
pub use pattern::{shape_of, PatternRegistry, NUMERIC_WILDCARD};

/// Outcome for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The line is kept; the string is what goes to the output.
    Accepted(String),
    Rejected(RejectReason),
    /// Blank line; neither kept nor counted.
    Skipped,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn into_accepted(self) -> Option<String> {
        match self {
            Verdict::Accepted(url) => Some(url),
            Verdict::Rejected(_) | Verdict::Skipped => None,
        }
    }
}

/// Stateful filter for one run.
///
/// Registries only grow, so an engine must not be reused across unrelated batches.
///
/// # Examples
///
/// ```
/// use urlsift::{FilterConfig, FilterEngine};
///
/// let mut engine = FilterEngine::new(FilterConfig::default()).unwrap();
/// let kept = engine.filter_all([
///     "https://x.com/p/1",
///     "https://x.com/p/2",
///     "https://x.com/logo.png",
/// ]);
/// assert_eq!(kept, vec!["https://x.com/p/1"]);
/// ```
#[derive(Debug)]
pub struct FilterEngine {
    config: FilterConfig,
    extensions: ExtensionClassifier,
    focus: ParamFocus,
    patterns: PatternRegistry,
    ledger: ParamLedger,
    dedup: DedupRegistry,
    stats: Arc<FilterStats>,
}

impl FilterEngine {
    /// Validates `config` and builds an engine with empty registries.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the filter combination is invalid.
    pub fn new(config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            extensions: ExtensionClassifier::new(&config),
            focus: config.param_focus(),
            patterns: PatternRegistry::new(),
            ledger: ParamLedger::new(config.ledger_mode),
            dedup: DedupRegistry::new(config.dedup_mode),
            stats: Arc::new(FilterStats::new()),
            config,
        })
    }

    /// Runs one line through every check and records the outcome.
    pub fn evaluate(&mut self, line: &str) -> Verdict {
        if line.trim().is_empty() {
            return Verdict::Skipped;
        }

        let Some(url) = ParsedUrl::parse(line) else {
            debug!("Skipping unparsable line: {:?}", line.trim());
            self.stats.increment_rejection(RejectReason::Unparsable);
            return Verdict::Rejected(RejectReason::Unparsable);
        };

        match self.classify(&url) {
            Ok(rendered) => {
                self.stats.increment_accepted();
                Verdict::Accepted(rendered)
            }
            Err(reason) => {
                trace!("Rejected {} ({})", url.raw, reason);
                self.stats.increment_rejection(reason);
                Verdict::Rejected(reason)
            }
        }
    }

    /// Like [`FilterEngine::evaluate`], returning only accepted output.
    pub fn process(&mut self, line: &str) -> Option<String> {
        self.evaluate(line).into_accepted()
    }

    /// Filters a whole batch, preserving input order.
    pub fn filter_all<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.process(line.as_ref()))
            .collect()
    }

    fn classify(&mut self, url: &ParsedUrl) -> Result<String, RejectReason> {
        self.extensions.check(url)?;

        if self.config.no_content && is_editorial_path(&url.path) {
            return Err(RejectReason::EditorialContent);
        }

        let has_query = url.has_query();
        if self.config.has_params && !has_query {
            return Err(RejectReason::MissingParams);
        }
        if self.config.no_params && has_query {
            return Err(RejectReason::UnwantedParams);
        }

        // A new parameter signature exempts the URL from shape rejection.
        let mut accepted_signature = None;
        if has_query {
            let sig = signature(&url.param_names, self.focus)
                .ok_or(RejectReason::NoInterestingParam)?;
            if !self.ledger.admit(&sig) {
                return Err(RejectReason::DuplicateParams);
            }
            accepted_signature = Some(sig);
        }
        let more_params = accepted_signature.is_some();

        let shape = shape_of(&url.path);
        if !self.patterns.register(&shape)
            && !more_params
            && self.patterns.matches_any(&url.path)
        {
            return Err(RejectReason::DuplicateShape);
        }

        let key = dedup_key(&url.host, &url.path, accepted_signature.as_deref());
        match self.dedup.offer(&key, &url.scheme, &url.raw) {
            KeyDecision::New => {}
            KeyDecision::Upgrade => self.stats.increment_upgrade(),
            KeyDecision::Duplicate => return Err(RejectReason::DuplicateKey),
        }

        Ok(self.render(url))
    }

    fn render(&self, url: &ParsedUrl) -> String {
        match &self.config.param_placeholder {
            // Names and placeholder are written verbatim so fuzzer markers survive.
            Some(placeholder) if url.has_query() && !url.param_names.is_empty() => {
                let query = url
                    .param_names
                    .iter()
                    .map(|name| format!("{name}={placeholder}"))
                    .collect::<Vec<_>>()
                    .join("&");
                format!("{}://{}{}?{}", url.scheme, url.host, url.path, query)
            }
            _ => url.raw.clone(),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }

    /// Shared handle to the counters, readable while the engine keeps running.
    pub fn stats_handle(&self) -> Arc<FilterStats> {
        Arc::clone(&self.stats)
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    pub fn ledger(&self) -> &ParamLedger {
        &self.ledger
    }
}

/// One-shot convenience: builds an engine from filter names and filters `urls`.
///
/// # Errors
///
/// Returns a [`ConfigError`] for unknown or conflicting filter names.
pub fn filter_urls<I, S>(urls: I, filters: &[&str]) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut engine = FilterEngine::new(FilterConfig::from_names(filters)?)?;
    Ok(engine.filter_all(urls))
}
