//! Escaping of `&`, `<`, `>` and `"` in literal text. An ampersand that
//! already starts an entity is left alone.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^&#?\w+;").unwrap());

pub fn try_parse_special_character(text: &str) -> Option<InlineMatch> {
    let entity = match text.as_bytes().first()? {
        b'&' if !ENTITY.is_match(text) => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        _ => return None,
    };
    Some(InlineMatch::markup(1, entity))
}
