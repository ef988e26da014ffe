//! Emphasis (`*a*`, `_a_`) and strong emphasis (`**a**`, `__a__`).
//!
//! Matching is non-greedy. A closing delimiter must not be followed by
//! another delimiter character, and a closing `_` must end a word.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::node::{Content, RenderNode};

// The trailing group stands in for a lookahead: it consumes at most one
// character after the closing delimiter, which is not part of the match.
static STRONG_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*]{2}((?:\\\*|[^*]|[*][^*]*[*])+?)[*]{2}(?:[^*]|$)").unwrap()
});
static STRONG_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^__((?:\\_|[^_]|_[^_]*_)+?)__(?:[^_]|$)").unwrap());
static EM_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*]((?:\\\*|[^*]|[*][*][^*]+?[*][*])+?)[*](?:[^*]|$)").unwrap()
});
static EM_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^_((?:\\_|[^_]|__[^_]*__)+?)_(?:\W|$)").unwrap()
});

/// Returns (bytes consumed, tag, inner text).
pub fn find_emphasis(text: &str) -> Option<(usize, &'static str, &str)> {
    let mut chars = text.chars();
    let marker = chars.next()?;
    let second = chars.next()?;

    let (strong, em) = match marker {
        '*' => (&*STRONG_STAR, &*EM_STAR),
        '_' => (&*STRONG_UNDERSCORE, &*EM_UNDERSCORE),
        _ => return None,
    };

    if second == marker
        && let Some(caps) = strong.captures(text)
    {
        let inner = caps.get(1)?;
        return Some((inner.end() + 2, "strong", inner.as_str()));
    }

    let caps = em.captures(text)?;
    let inner = caps.get(1)?;
    Some((inner.end() + 1, "i", inner.as_str()))
}

pub(super) fn try_parse_emphasis(text: &str) -> Option<InlineMatch> {
    let (len, tag, inner) = find_emphasis(text)?;
    log::trace!("Emphasis <{}> over {} bytes", tag, len);
    Some(InlineMatch::node(
        len,
        RenderNode::element(tag, Content::Inline(inner.to_string())),
    ))
}
