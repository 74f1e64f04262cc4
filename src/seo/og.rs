//! Open Graph and Twitter Card tag data.
//!
//! Provides pure data structures for OG tags generation.
//! Head injection is handled by `seo/merge.rs`.

use crate::utils::html::escape;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A tag property known to the resolver.
///
/// Variant order is output order: core Open Graph fields first, then the
/// Twitter and Facebook extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OgKey {
    Title,
    Description,
    Image,
    ImageAlt,
    Type,
    SiteName,
    Url,
    TwitterCard,
    TwitterImageAlt,
    TwitterSite,
    FbAppId,
}

impl OgKey {
    pub const ALL: [Self; 11] = [
        Self::Title,
        Self::Description,
        Self::Image,
        Self::ImageAlt,
        Self::Type,
        Self::SiteName,
        Self::Url,
        Self::TwitterCard,
        Self::TwitterImageAlt,
        Self::TwitterSite,
        Self::FbAppId,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "og:title",
            Self::Description => "og:description",
            Self::Image => "og:image",
            Self::ImageAlt => "og:image:alt",
            Self::Type => "og:type",
            Self::SiteName => "og:sitename",
            Self::Url => "og:url",
            Self::TwitterCard => "twitter:card",
            Self::TwitterImageAlt => "twitter:image:alt",
            Self::TwitterSite => "twitter:site",
            Self::FbAppId => "fb:app_id",
        }
    }

    /// Meta attribute carrying the key: Twitter reads `name`, everything
    /// else uses `property`.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::TwitterCard | Self::TwitterImageAlt | Self::TwitterSite => "name",
            _ => "property",
        }
    }
}

impl fmt::Display for OgKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved tags of one scope.
///
/// Values are HTML-escaped when inserted and never empty, so a key that is
/// present always renders a tag with content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeMap<OgKey, String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape and store `value`; blank or missing values leave the key unset.
    pub fn set(&mut self, key: OgKey, value: Option<&str>) {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => {
                self.tags.insert(key, escape(v).into_owned());
            }
            None => {
                self.tags.remove(&key);
            }
        }
    }

    /// Escaped value of `key`.
    pub fn get(&self, key: OgKey) -> Option<&str> {
        self.tags.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: OgKey) -> bool {
        self.tags.contains_key(&key)
    }

    /// Tags in output order.
    pub fn iter(&self) -> impl Iterator<Item = (OgKey, &str)> {
        self.tags.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_and_attributes() {
        assert_eq!(OgKey::SiteName.as_str(), "og:sitename");
        assert_eq!(OgKey::FbAppId.as_str(), "fb:app_id");
        for key in OgKey::ALL {
            let expected = if key.as_str().starts_with("twitter") {
                "name"
            } else {
                "property"
            };
            assert_eq!(key.attribute(), expected, "{key}");
        }
    }

    #[test]
    fn test_set_escapes_and_skips_blank() {
        let mut tags = TagSet::new();
        tags.set(OgKey::Title, Some(r#"Say "hi" <now>"#));
        tags.set(OgKey::Description, Some("   "));
        tags.set(OgKey::Image, None);

        assert_eq!(tags.get(OgKey::Title), Some("Say &quot;hi&quot; &lt;now&gt;"));
        assert!(!tags.contains(OgKey::Description));
        assert!(!tags.contains(OgKey::Image));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_set_none_clears() {
        let mut tags = TagSet::new();
        tags.set(OgKey::Type, Some("article"));
        tags.set(OgKey::Type, None);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_iter_follows_key_order() {
        let mut tags = TagSet::new();
        tags.set(OgKey::FbAppId, Some("1"));
        tags.set(OgKey::Url, Some("https://example.com/"));
        tags.set(OgKey::Title, Some("T"));
        tags.set(OgKey::TwitterCard, Some("summary_large_image"));

        let keys: Vec<_> = tags.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["og:title", "og:url", "twitter:card", "fb:app_id"]);
    }

    #[test]
    fn test_serialize_in_order() {
        let mut tags = TagSet::new();
        tags.set(OgKey::Type, Some("website"));
        tags.set(OgKey::Title, Some("A & B"));
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"og:title":"A &amp; B","og:type":"website"}"#);
    }
}
