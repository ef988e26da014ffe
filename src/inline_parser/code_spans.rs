//! Parsing for inline code spans (`code`)

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::node::{Content, RenderNode};

static LINE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]*\n").unwrap());

/// Longer backtick runs never open a code span.
const MAX_BACKTICK_RUN: usize = 32;

/// Find a code span at the start of `text`.
/// Returns the bytes consumed and the raw content between the backtick runs.
pub fn find_code_span(text: &str) -> Option<(usize, &str)> {
    // Count opening backticks
    let opening_backticks = text
        .bytes()
        .take(MAX_BACKTICK_RUN + 1)
        .take_while(|&b| b == b'`')
        .count();
    if opening_backticks == 0 || opening_backticks > MAX_BACKTICK_RUN {
        return None;
    }

    let rest = &text[opening_backticks..];

    let mut pos = 0;
    while pos < rest.len() {
        if rest[pos..].starts_with('`') {
            let closing_backticks = rest[pos..].bytes().take_while(|&b| b == b'`').count();

            if closing_backticks == opening_backticks && pos > 0 {
                let total_len = opening_backticks + pos + closing_backticks;
                return Some((total_len, &rest[..pos]));
            }
            // Skip these backticks and continue searching
            pos += closing_backticks;
        } else {
            pos += rest[pos..].chars().next()?.len_utf8();
        }
    }

    None
}

/// One space is stripped from each end; line breaks become spaces.
fn code_text(content: &str) -> String {
    let content = content.strip_prefix(' ').unwrap_or(content);
    let content = content.strip_suffix(' ').unwrap_or(content);
    LINE_END.replace_all(content, " ").into_owned()
}

pub(super) fn try_parse_code_span(text: &str) -> Option<InlineMatch> {
    let (len, content) = find_code_span(text)?;
    Some(InlineMatch::node(
        len,
        RenderNode::element("code", Content::Text(code_text(content))),
    ))
}
