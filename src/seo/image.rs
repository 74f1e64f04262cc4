//! Image reference validation and selection.
//!
//! - `resolve_image_path()` - accept a local or remote reference as an absolute URL
//! - `resolve_article_image()` - pick between an item's intro and full-text image
//!
//! Rejections are not errors; the tag is simply left out.

use crate::debug;
use crate::page::ItemImages;
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Read access to the content filesystem holding local images.
pub trait ContentFs {
    /// Whether `rel` (site-relative, `/`-separated) names an existing file.
    fn exists(&self, rel: &str) -> bool;
}

/// Content filesystem rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentFs for LocalFs {
    fn exists(&self, rel: &str) -> bool {
        let decoded = percent_decode_str(rel).decode_utf8_lossy();
        let rel = Path::new(decoded.trim_start_matches('/'));

        // Only plain descending paths; `..` or absolute parts could escape the root.
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return false;
        }
        self.root.join(rel).is_file()
    }
}

/// Drop a `#fragment` suffix (crop hints and similar) and surrounding blanks.
fn strip_fragment(raw: &str) -> &str {
    raw.split('#').next().unwrap_or_default().trim()
}

/// Last path segment of a reference, fragment and query removed.
fn basename(raw: &str) -> &str {
    let path = strip_fragment(raw);
    let path = path.split('?').next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or(path)
}

/// Validate an image reference and make it absolute.
///
/// - Remote `http(s)` URLs must use the same scheme as `base`, to avoid mixed
///   content warnings.
/// - Local references must exist in `fs` and are joined onto `base`.
/// - Anything else (other schemes, blank input) is rejected.
pub fn resolve_image_path(raw: &str, base: &Url, fs: &dyn ContentFs) -> Option<String> {
    let reference = strip_fragment(raw);
    if reference.is_empty() {
        return None;
    }

    // Protocol-relative references inherit the page scheme.
    if reference.starts_with("//") {
        return Some(format!("{}:{reference}", base.scheme()));
    }

    match Url::parse(reference) {
        Ok(url) => {
            let scheme = url.scheme();
            if !matches!(scheme, "http" | "https") {
                debug!("image"; "rejected `{}`: unsupported scheme `{}`", reference, scheme);
                return None;
            }
            if !scheme.eq_ignore_ascii_case(base.scheme()) {
                debug!("image"; "rejected `{}`: scheme differs from site `{}`", reference, base.scheme());
                return None;
            }
            Some(url.into())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let local = reference.trim_start_matches('/');
            if !fs.exists(local) {
                debug!("image"; "rejected `{}`: file not found", local);
                return None;
            }
            base.join(local).ok().map(Into::into)
        }
        Err(err) => {
            debug!("image"; "rejected `{}`: {}", reference, err);
            None
        }
    }
}

/// Choose and validate the item's own image.
///
/// With both slots filled, the one whose file name occurs first in `body`
/// wins; a name that never occurs ranks last, and ties go to the intro image.
/// Only the winner is validated; a rejected winner means no image.
pub fn resolve_article_image(
    images: &ItemImages,
    body: &str,
    base: &Url,
    fs: &dyn ContentFs,
) -> Option<String> {
    let chosen = match (images.intro.as_deref(), images.fulltext.as_deref()) {
        (Some(intro), Some(full)) => {
            let offset = |raw: &str| body.find(basename(raw)).unwrap_or(usize::MAX);
            if offset(full) < offset(intro) { full } else { intro }
        }
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return None,
    };

    resolve_image_path(chosen, base, fs)
}
