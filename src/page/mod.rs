//! Page context supplied by the CMS for one render.
//!
//! | Type         | Description                                          |
//! |--------------|------------------------------------------------------|
//! | `PageInput`  | Request facts: client, view, item id, URL            |
//! | `ItemRecord` | Content item fields plus raw attribute/image blobs   |
//! | `NavEntry`   | Active navigation entry with its parameter blob      |
//!
//! All of it is read-only and built fresh per request.

pub mod params;

pub use params::{Params, ParamsError, RawParams, ScopeParams};

use crate::debug;
use crate::utils::non_empty;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// JSON object map (order-preserving with `preserve_order`).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Which application the request is served by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Client {
    /// Public front end.
    #[default]
    Site,
    /// Back office; never receives social tags.
    #[serde(alias = "admin")]
    Administrator,
}

/// Request-level facts about the page being rendered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageInput {
    pub client: Client,
    /// View name, e.g. `"article"` for a single content item.
    #[serde(deserialize_with = "lenient_string")]
    pub view: String,
    /// Item id; `0` is treated as "no item".
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    /// Canonical URL of the current request, used for `og:url`.
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_record")]
    pub item: Option<ItemRecord>,
    #[serde(deserialize_with = "lenient_record")]
    pub navigation: Option<NavEntry>,
}

impl PageInput {
    /// Whether the view shows a single content item.
    pub fn is_item_view(&self) -> bool {
        matches!(self.view.as_str(), "article" | "item")
    }

    /// The content item, only when the view and id point at one.
    pub fn current_item(&self) -> Option<&ItemRecord> {
        if !self.is_item_view() || self.id.unwrap_or(0) == 0 {
            return None;
        }
        self.item.as_ref()
    }

    pub fn request_url(&self) -> Option<&str> {
        non_empty(Some(&self.url))
    }
}

/// A content item as rendered by the CMS.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    /// Intro part of the body (HTML).
    #[serde(deserialize_with = "lenient_string")]
    pub introtext: String,
    /// Remainder of the body after the read-more break (HTML).
    #[serde(deserialize_with = "lenient_string")]
    pub fulltext: String,
    /// Metadata description.
    #[serde(deserialize_with = "lenient_string")]
    pub metadesc: String,
    /// Per-item settings, including the Open Graph overrides.
    pub attribs: RawParams,
    /// `image_intro` / `image_fulltext` slots.
    pub images: RawParams,
}

impl ItemRecord {
    pub fn title(&self) -> Option<&str> {
        non_empty(Some(&self.title))
    }

    pub fn metadesc(&self) -> Option<&str> {
        non_empty(Some(&self.metadesc))
    }

    /// Intro and full text joined, in reading order.
    pub fn body(&self) -> String {
        format!("{}{}", self.introtext, self.fulltext)
    }
}

// ============================================================================
// Lenient field decoding
// ============================================================================

/// Text field; `null` and non-text values read as empty, numbers as text.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Item id as a number or a string with a numeric prefix (`"3:slug"`).
fn lenient_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => {
            let digits = s.trim_start();
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse().ok()
        }
        _ => None,
    })
}

/// Nested record; a value of the wrong shape reads as absent.
fn lenient_record<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .inspect_err(|err| debug!("page"; "ignoring malformed record: {}", err))
        .ok())
}

/// The two structured image slots of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemImages {
    pub intro: Option<String>,
    pub fulltext: Option<String>,
}

impl ItemImages {
    pub fn from_params(params: &Params) -> Self {
        Self {
            intro: params.text("image_intro"),
            fulltext: params.text("image_fulltext"),
        }
    }
}

/// The active navigation (menu) entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    /// Display title of the entry.
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    pub params: RawParams,
}

impl NavEntry {
    pub fn title(&self) -> Option<&str> {
        non_empty(Some(&self.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: serde_json::Value) -> PageInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_full() {
        let page = input(json!({
            "client": "site",
            "view": "article",
            "id": 3,
            "url": "https://example.com/a",
            "item": {
                "title": "Post",
                "introtext": "<p>Hi</p>",
                "attribs": "{\"og_title\":\"Custom\"}",
                "images": {"image_intro": "images/a.jpg"}
            },
            "navigation": {"title": "Blog", "params": {"metaOpenGraph": 1}}
        }));
        let item = page.current_item().unwrap();
        assert_eq!(item.title(), Some("Post"));
        assert_eq!(item.metadesc(), None);
        assert!(matches!(item.attribs, RawParams::Text(_)));
        assert!(matches!(item.images, RawParams::Object(_)));
        assert_eq!(page.navigation.as_ref().unwrap().title(), Some("Blog"));
        assert_eq!(page.request_url(), Some("https://example.com/a"));
    }

    #[test]
    fn test_defaults() {
        let page = input(json!({}));
        assert_eq!(page.client, Client::Site);
        assert!(page.current_item().is_none());
        assert!(page.request_url().is_none());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let page = input(json!({
            "view": "article",
            "id": 2,
            "url": null,
            "item": {"title": "Post", "metadesc": null, "introtext": null, "attribs": null},
            "navigation": {"title": null, "params": null}
        }));
        let item = page.current_item().unwrap();
        assert_eq!(item.title(), Some("Post"));
        assert_eq!(item.metadesc(), None);
        assert_eq!(item.body(), "");
        assert!(page.request_url().is_none());
        assert_eq!(page.navigation.as_ref().unwrap().title(), None);
    }

    #[test]
    fn test_id_forms() {
        let id = |value: serde_json::Value| input(json!({"id": value})).id;
        assert_eq!(id(json!(3)), Some(3));
        assert_eq!(id(json!("3")), Some(3));
        assert_eq!(id(json!("3:my-post")), Some(3));
        assert_eq!(id(json!("my-post")), None);
        assert_eq!(id(json!(-1)), None);
        assert_eq!(id(json!(null)), None);
        assert_eq!(id(json!([3])), None);
    }

    #[test]
    fn test_malformed_record_is_absent() {
        let page = input(json!({
            "view": "article",
            "id": "5:post",
            "item": "not an object",
            "navigation": {"title": "Blog"}
        }));
        assert!(page.item.is_none());
        assert!(page.current_item().is_none());
        assert_eq!(page.navigation.as_ref().unwrap().title(), Some("Blog"));
    }

    #[test]
    fn test_client_alias() {
        assert_eq!(input(json!({"client": "admin"})).client, Client::Administrator);
    }

    #[test]
    fn test_current_item_requires_item_view_and_id() {
        let item = json!({"title": "Post"});
        assert!(input(json!({"view": "category", "id": 3, "item": item.clone()})).current_item().is_none());
        assert!(input(json!({"view": "article", "id": 0, "item": item.clone()})).current_item().is_none());
        assert!(input(json!({"view": "article", "item": item.clone()})).current_item().is_none());
        assert!(input(json!({"view": "article", "id": 3})).current_item().is_none());
        assert!(input(json!({"view": "item", "id": 3, "item": item.clone()})).current_item().is_some());
    }

    #[test]
    fn test_body_joins_intro_and_full() {
        let item = ItemRecord {
            introtext: "<p>a</p>".into(),
            fulltext: "<p>b</p>".into(),
            ..Default::default()
        };
        assert_eq!(item.body(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_item_images() {
        let params = RawParams::Text(
            r#"{"image_intro":"images/a.jpg#crop=1","image_fulltext":""}"#.into(),
        )
        .parse()
        .unwrap();
        let images = ItemImages::from_params(&params);
        assert_eq!(images.intro.as_deref(), Some("images/a.jpg#crop=1"));
        assert_eq!(images.fulltext, None);
    }
}
