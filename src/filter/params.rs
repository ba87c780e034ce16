//! Query parameter signatures and the ledger of signatures already accepted.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Parameter names historically tied to file inclusion, SSRF, open redirect,
/// injection, template injection and debug switches.
#[rustfmt::skip]
pub const VULN_PARAMS: &[&str] = &[
    // file inclusion / path traversal
    "file", "document", "folder", "root", "path", "pg", "style", "pdf", "template",
    "php_path", "doc", "page", "name", "cat", "dir", "action", "board", "date", "detail",
    "download", "prefix", "include", "inc", "locate", "show", "site", "type", "view",
    "content", "layout", "mod", "conf", "filename", "filepath", "read", "load", "lang",
    "language", "module", "img", "image", "src", "source", "item",
    // ssrf / open redirect
    "url", "uri", "dest", "destination", "redirect", "redirect_uri", "redirect_url",
    "redir", "next", "return", "return_url", "return_to", "returnurl", "returnto",
    "continue", "goto", "target", "to", "out", "link", "domain", "callback", "callback_url",
    "feed", "host", "port", "navigation", "open", "window", "data", "reference", "site_url",
    "html", "val", "validate", "forward", "checkout_url", "rurl", "u", "image_url",
    "proxy", "remote", "webhook", "endpoint", "fetch", "ping",
    // command execution
    "cmd", "exec", "command", "execute", "run", "daemon", "upload", "log", "ip", "cli",
    "process", "code", "func", "function", "arg", "args", "option", "payload", "shell",
    "system", "sys", "query_cmd",
    // sql injection
    "id", "select", "report", "role", "update", "query", "user", "sort", "where",
    "search", "params", "results", "sleep", "fetch_id", "from", "order", "column", "field",
    "table", "delete", "string", "number", "filter", "key", "keyword", "sel", "row",
    "col", "limit", "offset", "group", "by", "uid", "pid", "cid",
    // template injection
    "preview", "activity", "email", "username", "tpl", "theme", "render",
    // insecure direct object reference
    "account", "doc_id", "edit", "no", "order_id", "profile", "user_id", "invoice", "number_id",
    // xss
    "q", "s", "keywords", "term", "text", "message", "msg", "comment", "title", "desc",
    "description", "lookup",
    // debug switches
    "access", "admin", "dbg", "debug", "grant", "test", "alter", "clone", "create",
    "disable", "enable", "make", "modify", "rename", "reset", "shell_exec", "toggle",
    "adm", "cfg", "config", "token", "auth", "password", "passwd", "pass", "secret",
];

/// Parameter names that commonly carry a post-action redirect target.
#[rustfmt::skip]
pub const REDIRECT_PARAMS: &[&str] = &[
    "url", "next", "return_url", "returnurl", "return_to", "returnto", "return", "redirect",
    "redirect_uri", "redirect_url", "redirecturl", "redir", "goto", "dest", "destination",
    "continue", "target", "to", "out", "forward", "checkout_url", "rurl", "callback",
];

static VULN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VULN_PARAMS.iter().copied().collect());

static REDIRECT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| REDIRECT_PARAMS.iter().copied().collect());

/// Which parameter names make up a URL's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamFocus {
    /// Every name, sorted.
    #[default]
    All,
    /// First name found in [`VULN_PARAMS`].
    Vulnerable,
    /// First name found in [`REDIRECT_PARAMS`].
    Redirect,
}

impl ParamFocus {
    fn dictionary(self) -> Option<&'static HashSet<&'static str>> {
        match self {
            ParamFocus::All => None,
            ParamFocus::Vulnerable => Some(&*VULN_SET),
            ParamFocus::Redirect => Some(&*REDIRECT_SET),
        }
    }
}

/// Builds the signature for a URL's parameter names.
///
/// Returns `None` when a dictionary focus is active and no name qualifies.
pub fn signature(names: &[String], focus: ParamFocus) -> Option<Vec<String>> {
    match focus.dictionary() {
        None => {
            let mut sorted = names.to_vec();
            sorted.sort();
            Some(sorted)
        }
        Some(dictionary) => names
            .iter()
            .find(|name| dictionary.contains(name.to_lowercase().as_str()))
            .map(|name| vec![name.clone()]),
    }
}

/// How the ledger decides that a signature was already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgerMode {
    /// Same cardinality as some accepted signature, and at least one name anywhere in
    /// the ledger. Cheap and deliberately loose.
    #[default]
    Loose,
    /// Exact membership of the sorted name tuple.
    Strict,
}

/// Every parameter name accepted so far, in acceptance order.
///
/// The name list is flat across URLs and keeps duplicates.
#[derive(Debug, Default)]
pub struct ParamLedger {
    mode: LedgerMode,
    names: Vec<String>,
    name_set: HashSet<String>,
    cardinalities: HashSet<usize>,
    signatures: HashSet<Vec<String>>,
}

impl ParamLedger {
    pub fn new(mode: LedgerMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Returns `true` if an equivalent signature was accepted earlier.
    pub fn is_known(&self, signature: &[String]) -> bool {
        match self.mode {
            LedgerMode::Loose => {
                !self.names.is_empty()
                    && self.cardinalities.contains(&signature.len())
                    && signature.iter().any(|name| self.name_set.contains(name))
            }
            LedgerMode::Strict => self.signatures.contains(&sorted(signature)),
        }
    }

    pub fn record(&mut self, signature: &[String]) {
        for name in signature {
            self.names.push(name.clone());
            self.name_set.insert(name.clone());
        }
        self.cardinalities.insert(signature.len());
        self.signatures.insert(sorted(signature));
    }

    /// Records `signature` unless it is already known. Returns `true` if it was new.
    pub fn admit(&mut self, signature: &[String]) -> bool {
        if self.is_known(signature) {
            return false;
        }
        self.record(signature);
        true
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

fn sorted(signature: &[String]) -> Vec<String> {
    let mut copy = signature.to_vec();
    copy.sort();
    copy
}
