//! Scope parameter blobs.
//!
//! The CMS stores per-item attributes, item images and navigation parameters
//! as JSON, sometimes as an object and sometimes as a string holding JSON.
//! Both shapes are accepted; parsing is lenient about value types because
//! form-backed settings arrive as `"1"`, `1` or `true` interchangeably.

use super::JsonMap;
use crate::utils::non_empty;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why a parameter blob could not be read.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("malformed parameter JSON")]
    Malformed(#[from] serde_json::Error),

    #[error("parameters must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// A parameter blob as supplied by the CMS.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawParams {
    Object(JsonMap),
    Text(String),
    /// Anything else (`null`, arrays, numbers); rejected at parse time.
    Other(Value),
}

impl Default for RawParams {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawParams {
    /// Decode into a key/value view. A blank string is an empty blob.
    pub fn parse(&self) -> Result<Params, ParamsError> {
        match self {
            Self::Object(map) => Ok(Params(map.clone())),
            Self::Text(text) if text.trim().is_empty() => Ok(Params::default()),
            Self::Text(text) => match serde_json::from_str::<Value>(text)? {
                Value::Object(map) => Ok(Params(map)),
                Value::Null => Ok(Params::default()),
                other => Err(ParamsError::NotAnObject(json_kind(&other))),
            },
            Self::Other(Value::Null) => Ok(Params::default()),
            Self::Other(other) => Err(ParamsError::NotAnObject(json_kind(other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decoded parameters with typed lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(JsonMap);

impl Params {
    /// Non-blank string value. Numbers are accepted and rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => non_empty(Some(s)).map(String::from),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Switch value; `None` when unset or unrecognizable.
    ///
    /// Accepts booleans, `0`/`1` and their string forms, `"true"`/`"false"`.
    /// An empty string is "use default", not "off".
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64()? {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Open Graph overrides configured on one scope (item or navigation entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeParams {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub og_sitename: Option<String>,
    /// `None` means the scope leaves the decision to its parent.
    pub meta_open_graph: Option<bool>,
    pub meta_twitter_card: Option<bool>,
}

impl ScopeParams {
    pub fn from_params(params: &Params) -> Self {
        Self {
            og_title: params.text("og_title"),
            og_description: params.text("og_description"),
            og_image: params.text("og_image"),
            og_type: params.text("og_type"),
            og_sitename: params.text("og_sitename"),
            meta_open_graph: params.flag("metaOpenGraph"),
            meta_twitter_card: params.flag("metaTwitterCard"),
        }
    }

    /// Whether the scope states either switch itself.
    pub fn sets_any_flag(&self) -> bool {
        self.meta_open_graph.is_some() || self.meta_twitter_card.is_some()
    }
}
