//! Merging resolved tags into the page head.
//!
//! The head is a list of raw fragments owned by the CMS. Merging only ever
//! removes social meta tags (when asked to) and appends new ones; every other
//! fragment keeps its text and relative order.

use super::og::TagSet;
use crate::debug;
use crate::utils::html::parse_attributes;
use regex::Regex;
use std::sync::LazyLock;

/// Attribute list of a `<meta ...>` fragment; quoted values may contain `>`.
static RE_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)^\s*<meta\b((?:[^>"']|"[^"]*"|'[^']*')*)>\s*$"#).unwrap()
});

/// Property prefixes of the tag families written by the merger.
const SOCIAL_PREFIXES: [&str; 3] = ["og:", "twitter:", "fb:"];

/// Ordered head fragments of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadDocument {
    fragments: Vec<String>,
}

impl HeadDocument {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Split markup into fragments, one per non-blank line.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }

    /// Merge `tags` into the head.
    ///
    /// With `strip_prior`, existing Open Graph/Twitter/Facebook meta tags are
    /// dropped first so repeated merges don't pile up. An empty tag set leaves
    /// the head untouched.
    pub fn merge(&mut self, tags: &TagSet, strip_prior: bool) {
        let batch = render_tags(tags);
        if batch.is_empty() {
            return;
        }

        if strip_prior {
            let before = self.fragments.len();
            self.fragments.retain(|fragment| !is_social_tag(fragment));
            debug!("merge"; "stripped {} prior tags", before - self.fragments.len());
        }

        debug!("merge"; "appending {} tags", batch.len());
        self.fragments.extend(batch);
    }
}

/// Render one self-closing meta element per tag, in tag order.
///
/// Values are already escaped by the resolver and are written verbatim.
pub fn render_tags(tags: &TagSet) -> Vec<String> {
    tags.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!(r#"<meta {}="{key}" content="{value}" />"#, key.attribute()))
        .collect()
}

/// Whether a head fragment is a social meta tag (`property`/`name` starting
/// with `og:`, `twitter:` or `fb:`).
pub fn is_social_tag(fragment: &str) -> bool {
    let Some(caps) = RE_META.captures(fragment) else {
        return false;
    };

    parse_attributes(&caps[1]).iter().any(|(name, value)| {
        let name = name.to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        matches!(name.as_str(), "property" | "name")
            && SOCIAL_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
    })
}
