//! `[plugin]` configuration.
//!
//! Plugin-level defaults (the fallback tier for item and navigation scopes)
//! and the global switches steering selection and merging.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::non_empty;
use serde::{Deserialize, Serialize};

/// Plugin-wide tag defaults and feature flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSectionConfig {
    /// Emit Open Graph tags at site level, and for items delegating to it.
    pub meta_open_graph: bool,

    /// Emit Twitter Card tags at site level, and for items delegating to it.
    pub meta_twitter_card: bool,

    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_type: String,
    pub og_sitename: String,

    /// Items without their own switches inherit `meta_open_graph` and
    /// `meta_twitter_card`.
    pub use_article_content: bool,

    /// Prefer the item's tags over the navigation entry's when both exist.
    pub hierarchy: bool,

    /// Strip existing `og:`/`twitter:` tags from the head before merging.
    pub remove_other_tags: bool,

    pub fb_application_id: String,

    /// Twitter handle for `twitter:site` (e.g., "@example").
    pub tw_site_name: String,
}

impl Default for PluginSectionConfig {
    fn default() -> Self {
        Self {
            meta_open_graph: false,
            meta_twitter_card: false,
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            og_type: "website".into(),
            og_sitename: String::new(),
            use_article_content: true,
            hierarchy: false,
            remove_other_tags: false,
            fb_application_id: String::new(),
            tw_site_name: String::new(),
        }
    }
}

impl PluginSectionConfig {
    pub const TW_SITE_NAME: FieldPath = FieldPath::new("plugin.tw_site_name");
    pub const FB_APPLICATION_ID: FieldPath = FieldPath::new("plugin.fb_application_id");

    pub fn title(&self) -> Option<&str> {
        non_empty(Some(&self.og_title))
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(Some(&self.og_description))
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(Some(&self.og_image))
    }

    pub fn og_type(&self) -> Option<&str> {
        non_empty(Some(&self.og_type))
    }

    pub fn sitename(&self) -> Option<&str> {
        non_empty(Some(&self.og_sitename))
    }

    pub fn fb_app_id(&self) -> Option<&str> {
        non_empty(Some(&self.fb_application_id))
    }

    pub fn twitter_site(&self) -> Option<&str> {
        non_empty(Some(&self.tw_site_name))
    }

    /// Validate plugin configuration (warnings only).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(handle) = self.twitter_site()
            && !handle.starts_with('@')
        {
            diag.warn(
                Self::TW_SITE_NAME,
                format!("`{handle}` does not look like a Twitter handle (expected `@name`)"),
            );
        }

        if let Some(id) = self.fb_app_id()
            && !id.chars().all(|c| c.is_ascii_digit())
        {
            diag.warn(
                Self::FB_APPLICATION_ID,
                format!("`{id}` is not numeric, Facebook app ids are digits only"),
            );
        }
    }
}
