//! Configuration management for `ogmeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] and [plugin] definitions
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Example"
//! description = "News from the example team"
//! url = "https://example.com/"
//! root = "public"
//!
//! [plugin]
//! meta_open_graph = true
//! meta_twitter_card = true
//! tw_site_name = "@example"
//! remove_other_tags = true
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{PluginSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing ogmeta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity and base URL
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Tag defaults and switches
    #[serde(default)]
    pub plugin: PluginSectionConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file, warn about unknown fields and validate.
    ///
    /// `site.root` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        if let Some(parent) = path.parent()
            && config.site.root.is_relative()
        {
            config.site.root = parent.join(&config.site.root);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Run all section checks; errors abort, warnings are printed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.plugin.validate(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}
