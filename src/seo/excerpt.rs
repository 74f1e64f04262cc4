//! Description excerpt generated from an item's body.

use crate::utils::html::strip_tags;

/// Wrap width of the excerpt, in characters.
pub const EXCERPT_WIDTH: usize = 200;

/// Marker appended when the body was cut.
const ELLIPSIS: &str = "...";

/// Build a single-line excerpt from HTML body text.
///
/// Markup is stripped and whitespace runs collapse to one space. Text longer
/// than [`EXCERPT_WIDTH`] is cut at the last word break that fits, and an
/// ellipsis marks the cut. A first word longer than the width is kept whole.
pub fn excerpt(body: &str) -> Option<String> {
    let text = strip_tags(body);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }

    if text.chars().count() <= EXCERPT_WIDTH {
        return Some(text);
    }

    let line = first_line(&text, EXCERPT_WIDTH);
    if line.len() == text.len() {
        return Some(text);
    }
    Some(format!("{line}{ELLIPSIS}"))
}

/// First line of `text` word-wrapped at `width` characters.
///
/// Breaks at the last space whose character index is at most `width`; with no
/// such space the line runs to the next space (or the end).
fn first_line(text: &str, width: usize) -> &str {
    let mut last_fit = None;
    for (index, (byte, c)) in text.char_indices().enumerate() {
        if c != ' ' {
            continue;
        }
        if index <= width {
            last_fit = Some(byte);
        } else {
            return &text[..last_fit.unwrap_or(byte)];
        }
    }
    &text[..last_fit.unwrap_or(text.len())]
}
