//! `[site]` configuration.
//!
//! Site-wide information used as the last fallback tier and as the base for
//! resolving image references.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::non_empty;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Site identity and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site name, fallback for `og:title` and `og:sitename`.
    pub name: String,

    /// Site-wide default meta description.
    pub description: String,

    /// Base URL (e.g., "https://example.com/"). Its scheme decides which
    /// remote images are accepted.
    pub url: Option<String>,

    /// Content filesystem root holding local images (relative to config file).
    pub root: PathBuf,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            url: None,
            root: PathBuf::from("."),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const ROOT: FieldPath = FieldPath::new("site.root");

    pub fn name(&self) -> Option<&str> {
        non_empty(Some(&self.name))
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(Some(&self.description))
    }

    /// Parsed base URL with a trailing slash, so relative references join
    /// below it instead of replacing its last segment.
    pub fn base_url(&self) -> Option<Url> {
        let raw = non_empty(self.url.as_deref())?;
        let mut url = Url::parse(raw).ok()?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Some(url)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, when set, must be an absolute `http`/`https` URL
    /// - `root` should exist (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(raw) = non_empty(self.url.as_deref()) {
            match Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => diag.error_with_hint(
                    Self::URL,
                    format!("unsupported scheme `{}`", url.scheme()),
                    "use an http or https URL, e.g. https://example.com/",
                ),
                Err(err) => diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL `{raw}`: {err}"),
                    "use an absolute URL, e.g. https://example.com/",
                ),
            }
        }

        if !self.root.is_dir() {
            diag.warn(
                Self::ROOT,
                format!(
                    "`{}` is not a directory, local images will be rejected",
                    self.root.display()
                ),
            );
        }
    }
}
