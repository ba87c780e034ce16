//! Filter selection for a run.
//!
//! A [`FilterConfig`] is built once from the caller's filter names and extension lists,
//! validated, and then handed to the engine unchanged.

use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::ConfigError;
use crate::filter::{DedupMode, LedgerMode, ParamFocus};

/// Filters recognized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum BuiltinFilter {
    Vuln,
    Redirect,
    HasParams,
    NoParams,
    HasExtension,
    NoExtension,
    NoContent,
}

impl BuiltinFilter {
    /// Resolves a filter name, accepting the singular/plural aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "vuln" | "vulns" => Some(BuiltinFilter::Vuln),
            "redirect" | "redirects" => Some(BuiltinFilter::Redirect),
            "hasparams" | "hasparam" => Some(BuiltinFilter::HasParams),
            "noparams" | "noparam" => Some(BuiltinFilter::NoParams),
            "hasextension" => Some(BuiltinFilter::HasExtension),
            "noextension" => Some(BuiltinFilter::NoExtension),
            "nocontent" => Some(BuiltinFilter::NoContent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinFilter::Vuln => "vuln",
            BuiltinFilter::Redirect => "redirect",
            BuiltinFilter::HasParams => "hasparams",
            BuiltinFilter::NoParams => "noparams",
            BuiltinFilter::HasExtension => "hasextension",
            BuiltinFilter::NoExtension => "noextension",
            BuiltinFilter::NoContent => "nocontent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuiltinFilter::Vuln => {
                "keep only urls with a parameter commonly tied to vulnerabilities (i.e. ?file=, ?cmd=)"
            }
            BuiltinFilter::Redirect => {
                "keep only urls with a redirect-prone parameter (i.e. ?next=, ?return_url=)"
            }
            BuiltinFilter::HasParams => {
                "filter only for urls that have parameters (i.e. http://example.com/?p=123)"
            }
            BuiltinFilter::NoParams => {
                "exclude urls that have parameters (i.e. http://example.com/blog)"
            }
            BuiltinFilter::HasExtension => {
                "filter only for urls that have extensions (i.e. http://example.com/index.php)"
            }
            BuiltinFilter::NoExtension => {
                "exclude urls that have extensions (i.e. http://example.com/blog)"
            }
            BuiltinFilter::NoContent => {
                "exclude urls that are likely to contain human content (i.e. blogs, stories, articles...)"
            }
        }
    }
}

/// Active filter selection for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub vuln: bool,
    pub redirect: bool,
    pub has_params: bool,
    pub no_params: bool,
    pub has_extension: bool,
    pub no_extension: bool,
    pub no_content: bool,
    /// Extensions to drop in addition to the built-in useless set.
    pub blacklist: Vec<String>,
    /// Only these extensions survive; replaces the built-in useless set.
    pub whitelist: Vec<String>,
    /// Drop `chunk-*`, `app.*` and `*.min.js` scripts.
    pub drop_js_bundles: bool,
    pub ledger_mode: LedgerMode,
    pub dedup_mode: DedupMode,
    /// Replace every parameter value in accepted URLs with this string.
    pub param_placeholder: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            vuln: false,
            redirect: false,
            has_params: false,
            no_params: false,
            has_extension: false,
            no_extension: false,
            no_content: false,
            blacklist: Vec::new(),
            whitelist: Vec::new(),
            drop_js_bundles: true,
            ledger_mode: LedgerMode::default(),
            dedup_mode: DedupMode::default(),
            param_placeholder: None,
        }
    }
}

impl FilterConfig {
    /// Builds a validated config from filter names such as `["vuln", "nocontent"]`.
    ///
    /// Blank names are ignored. Any other unrecognized name is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFilter`] for unrecognized names, or the error from
    /// [`FilterConfig::validate`].
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let filter = BuiltinFilter::from_name(name)
                .ok_or_else(|| ConfigError::UnknownFilter(name.to_string()))?;
            config.enable(filter);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn enable(&mut self, filter: BuiltinFilter) {
        match filter {
            BuiltinFilter::Vuln => self.vuln = true,
            BuiltinFilter::Redirect => self.redirect = true,
            BuiltinFilter::HasParams => self.has_params = true,
            BuiltinFilter::NoParams => self.no_params = true,
            BuiltinFilter::HasExtension => self.has_extension = true,
            BuiltinFilter::NoExtension => self.no_extension = true,
            BuiltinFilter::NoContent => self.no_content = true,
        }
    }

    pub fn is_enabled(&self, filter: BuiltinFilter) -> bool {
        match filter {
            BuiltinFilter::Vuln => self.vuln,
            BuiltinFilter::Redirect => self.redirect,
            BuiltinFilter::HasParams => self.has_params,
            BuiltinFilter::NoParams => self.no_params,
            BuiltinFilter::HasExtension => self.has_extension,
            BuiltinFilter::NoExtension => self.no_extension,
            BuiltinFilter::NoContent => self.no_content,
        }
    }

    pub fn with_blacklist(mut self, raw: &str) -> Self {
        self.blacklist = parse_extension_list(raw);
        self
    }

    pub fn with_whitelist(mut self, raw: &str) -> Self {
        self.whitelist = parse_extension_list(raw);
        self
    }

    /// Checks for filter combinations that cannot both hold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingFilters`] for `hasparams`+`noparams`,
    /// `hasextension`+`noextension` or `vuln`+`redirect`, and
    /// [`ConfigError::ExtensionListConflict`] when both extension lists are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let exclusive = [
            (BuiltinFilter::HasParams, BuiltinFilter::NoParams),
            (BuiltinFilter::HasExtension, BuiltinFilter::NoExtension),
            (BuiltinFilter::Vuln, BuiltinFilter::Redirect),
        ];
        for (first, second) in exclusive {
            if self.is_enabled(first) && self.is_enabled(second) {
                return Err(ConfigError::ConflictingFilters {
                    first: first.as_str(),
                    second: second.as_str(),
                });
            }
        }

        if !self.blacklist.is_empty() && !self.whitelist.is_empty() {
            return Err(ConfigError::ExtensionListConflict);
        }

        Ok(())
    }

    /// Which parameter names form a URL's signature under this config.
    pub fn param_focus(&self) -> ParamFocus {
        if self.vuln {
            ParamFocus::Vulnerable
        } else if self.redirect {
            ParamFocus::Redirect
        } else {
            ParamFocus::All
        }
    }

    /// Names of the enabled built-in filters.
    pub fn active_filters(&self) -> Vec<&'static str> {
        use strum::IntoEnumIterator;
        BuiltinFilter::iter()
            .filter(|f| self.is_enabled(*f))
            .map(|f| f.as_str())
            .collect()
    }
}

/// Splits a comma-separated extension list (`"php, .ASP"` becomes `["php", "asp"]`).
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_extension)
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Canonical form of one extension list entry (`" .PHP"` becomes `"php"`).
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
