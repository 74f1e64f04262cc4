//! HTML helpers for tag values and body text.
//!
//! - `escape()` / `unescape()` - HTML entity handling
//! - `strip_tags()` - markup removal for excerpts
//! - `parse_attributes()` - attribute string parsing for head fragments

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters, quotes included.
///
/// Output is safe inside a double-quoted attribute value. Uses `Cow` to avoid
/// allocation when nothing needs escaping.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("Say \"hi\" <b>"), "Say &quot;hi&quot; &lt;b&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
/// Unknown entities are kept verbatim.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        let mut entity = String::new();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                terminated = true;
                break;
            }
            if !(next.is_ascii_alphanumeric() || next == '#') || entity.len() > 10 {
                break;
            }
            entity.push(next);
            chars.next();
        }

        if !terminated || entity.is_empty() {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        match entity.as_str() {
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "amp" => result.push('&'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push('\u{00A0}'),
            s if s.starts_with('#') => {
                let code = if s.starts_with("#x") || s.starts_with("#X") {
                    u32::from_str_radix(&s[2..], 16).ok()
                } else {
                    s[1..].parse().ok()
                };
                match code.and_then(char::from_u32) {
                    Some(c) => result.push(c),
                    None => {
                        result.push('&');
                        result.push_str(&entity);
                        result.push(';');
                    }
                }
            }
            _ => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

// =============================================================================
// Markup Stripping
// =============================================================================

/// Comments and raw-text elements whose content is never visible text.
static RE_HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .unwrap()
});

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9-]*)[^>]*>").unwrap());

/// Remove markup from an HTML fragment, keeping its text.
///
/// Block-level tags and `<br>` become a space so that adjacent paragraphs
/// don't run together; inline tags vanish. Entities are decoded.
pub fn strip_tags(html: &str) -> String {
    let visible = RE_HIDDEN.replace_all(html, " ");
    let text = RE_TAG.replace_all(&visible, |caps: &regex::Captures<'_>| {
        let tag = caps[1].to_ascii_lowercase();
        if is_block_element(&tag) || tag == "br" {
            " "
        } else {
            ""
        }
    });
    unescape(&text).into_owned()
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if tag is a block-level element.
#[inline]
pub fn is_block_element(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "figcaption"
            | "figure"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "td"
            | "th"
            | "tr"
            | "ul"
    )
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Parse HTML-style attributes from a string.
///
/// Input: `property="og:title" content='Hi' data-x=1 hidden`
/// Output: `vec![("property", "og:title"), ("content", "Hi"), ("data-x", "1"), ("hidden", "")]`
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == '/' {
            continue;
        }

        let mut name = String::from(c);
        while let Some(&next) = chars.peek() {
            if next == '=' || next.is_whitespace() || next == '/' {
                break;
            }
            name.push(next);
            chars.next();
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        if chars.peek() != Some(&'=') {
            // Boolean attribute
            attrs.push((name, String::new()));
            continue;
        }
        chars.next();

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let mut value = String::new();
        match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                for c in chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            _ => {
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }
            }
        }

        attrs.push((name, value));
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert!(matches!(escape("hello world"), Cow::Borrowed(_)));
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("hello"), "hello");
        assert_eq!(unescape("&lt;b&gt;"), "<b>");
        assert_eq!(unescape("a &amp; b"), "a & b");
        assert_eq!(unescape("&#39;&#x27;&#65;"), "''A");
        assert_eq!(unescape("&nbsp;"), "\u{00A0}");
    }

    #[test]
    fn test_unescape_keeps_bare_ampersand() {
        assert_eq!(unescape("Q&A session"), "Q&A session");
        assert_eq!(unescape("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_strip_tags_inline_and_block() {
        assert_eq!(strip_tags("<p>One <b>bold</b></p><p>Two</p>"), " One bold  Two ");
        assert_eq!(strip_tags("a<br/>b"), "a b");
    }

    #[test]
    fn test_strip_tags_drops_hidden_content() {
        let html = "<script>var x = '<p>';</script>Text<!-- note --><style>p{}</style>";
        assert_eq!(strip_tags(html).trim(), "Text");
    }

    #[test]
    fn test_strip_tags_decodes_entities() {
        assert_eq!(strip_tags("Fish &amp; Chips"), "Fish & Chips");
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(r#"property="og:title" content='Hi there' x=1 hidden /"#);
        assert_eq!(
            attrs,
            vec![
                ("property".to_string(), "og:title".to_string()),
                ("content".to_string(), "Hi there".to_string()),
                ("x".to_string(), "1".to_string()),
                ("hidden".to_string(), String::new()),
            ]
        );
    }
}
