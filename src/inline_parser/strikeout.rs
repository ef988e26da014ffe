//! Strikethrough: `~~text~~` on a single line, not padded with whitespace
//! inside the delimiters.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::node::{Content, RenderNode};

static STRIKEOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^~~(\S|\S.*?\S)~~").unwrap());

/// Returns (bytes consumed, inner text).
pub fn find_strikeout(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with("~~") {
        return None;
    }
    let caps = STRIKEOUT.captures(text)?;
    Some((caps.get(0)?.len(), caps.get(1)?.as_str()))
}

pub fn try_parse_strikeout(text: &str) -> Option<InlineMatch> {
    let (len, inner) = find_strikeout(text)?;
    Some(InlineMatch::node(
        len,
        RenderNode::element("del", Content::Inline(inner.to_string())),
    ))
}
