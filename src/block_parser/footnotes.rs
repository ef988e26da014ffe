//! Footnote definitions (extended dialect): `[^label]: text`.
//!
//! Continuation lines are appended until a blank line; after a blank line
//! only lines indented four or more spaces continue the footnote, starting a
//! new paragraph inside it.

use std::sync::LazyLock;

use regex::Regex;

use super::{Block, BlockBody};
use crate::lines::Line;
use crate::registry::BlockKind;

static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^(.+?)\]:[ ]?(.*)$").unwrap());
static FOOTNOTE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[\^(.+?)\]:").unwrap());

pub(crate) fn try_parse_footnote(line: &Line) -> Option<Block> {
    let caps = FOOTNOTE.captures(line.text())?;
    Some(Block::hidden(
        BlockKind::Footnote,
        BlockBody::Footnote {
            label: caps[1].to_string(),
            text: caps[2].to_string(),
        },
    ))
}

pub(crate) fn continue_footnote(text: &mut String, line: &Line, interrupted: &mut bool) -> bool {
    if FOOTNOTE_START.is_match(line.text()) {
        return false;
    }

    if *interrupted {
        if line.indent < 4 {
            return false;
        }
        text.push_str("\n\n");
        text.push_str(line.text());
        *interrupted = false;
        return true;
    }

    text.push('\n');
    text.push_str(line.text());
    true
}

/// Lines of the footnote text, for scanning as nested blocks.
pub(crate) fn footnote_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
