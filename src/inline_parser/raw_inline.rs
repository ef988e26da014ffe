//! Inline HTML passed through verbatim: closing tags, comments and opening
//! tags with well-formed attributes. Only consulted while raw markup is
//! allowed.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::block_parser::html_blocks::ATTRIBUTE;

static CLOSING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</\w[\w-]*[ ]*>").unwrap());
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<!---?[^>-](?:-?[^-])*-->").unwrap());
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^<\w[\w-]*(?:[ ]*{})*[ ]*/?>", ATTRIBUTE)).unwrap()
});

pub fn try_parse_markup(text: &str) -> Option<InlineMatch> {
    let pattern = match text.as_bytes().get(1)? {
        b'/' => &*CLOSING_TAG,
        b'!' => &*COMMENT,
        _ => &*OPENING_TAG,
    };
    let tag = pattern.find(text)?;
    Some(InlineMatch::markup(tag.len(), tag.as_str()))
}
