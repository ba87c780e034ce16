//! File extension checks.

use std::collections::HashSet;

use crate::config::{normalize_extension, FilterConfig};
use crate::error_handling::RejectReason;

use super::normalize::ParsedUrl;

/// Extensions that never matter for application-layer recon: images, fonts, audio,
/// video, archives and stylesheets.
pub const USELESS_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpeg", "gif", "jpg", "svg", "jfif", "avif", "webp", "ico", "tif", "tiff", "bmp",
    // fonts
    "ttf", "woff", "woff2", "eot", "otf",
    // audio / video
    "mp3", "mp4", "avi", "mov", "wmv", "flv", "mkv", "webm", "mpg", "mpeg", "wav", "ogv",
    "ogg", "m4a", "m4v",
    // archives
    "zip", "rar", "7z", "tar", "gz", "tgz", "bz2",
    // style / plugins
    "css", "swf",
];

/// Last-segment prefixes of bundler output that is never hand-written code.
const JS_BUNDLE_PREFIXES: &[&str] = &["chunk-", "app."];
const JS_BUNDLE_SUFFIX: &str = ".min.js";

/// Applies the extension rules of a [`FilterConfig`] to parsed URLs.
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    require_extension: bool,
    forbid_extension: bool,
    blacklist: HashSet<String>,
    whitelist: HashSet<String>,
    useless: HashSet<&'static str>,
    drop_js_bundles: bool,
}

impl ExtensionClassifier {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            require_extension: config.has_extension,
            forbid_extension: config.no_extension,
            blacklist: normalized(&config.blacklist),
            whitelist: normalized(&config.whitelist),
            useless: USELESS_EXTENSIONS.iter().copied().collect(),
            drop_js_bundles: config.drop_js_bundles,
        }
    }

    /// Returns `Err` with the reason when the URL's extension disqualifies it.
    pub fn check(&self, url: &ParsedUrl) -> Result<(), RejectReason> {
        let extension = url.extension();

        if extension.is_empty() {
            if self.require_extension {
                return Err(RejectReason::MissingExtension);
            }
            return Ok(());
        }

        if self.forbid_extension {
            return Err(RejectReason::UnwantedExtension);
        }

        if !self.blacklist.is_empty() && self.blacklist.contains(&extension) {
            return Err(RejectReason::BlacklistedExtension);
        }

        if !self.whitelist.is_empty() {
            if !self.whitelist.contains(&extension) {
                return Err(RejectReason::NotWhitelisted);
            }
        } else if self.useless.contains(extension.as_str()) {
            return Err(RejectReason::UselessExtension);
        }

        if self.drop_js_bundles && extension == "js" && is_js_bundle(url.last_segment()) {
            return Err(RejectReason::JsBundle);
        }

        Ok(())
    }
}

fn normalized(list: &[String]) -> HashSet<String> {
    list.iter()
        .map(|ext| normalize_extension(ext))
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn is_js_bundle(segment: &str) -> bool {
    JS_BUNDLE_PREFIXES
        .iter()
        .any(|prefix| segment.starts_with(prefix))
        || segment.ends_with(JS_BUNDLE_SUFFIX)
}
