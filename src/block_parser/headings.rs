//! ATX and setext heading parsing utilities.

use super::attributes::{try_parse_heading_attributes, try_parse_setext_attributes};
use super::paragraphs::open_paragraph;
use super::{Block, BlockBody};
use crate::lines::Line;
use crate::registry::BlockKind;

/// Try to parse an ATX heading. The marker run may be glued to the text
/// (`#Title`), and surrounding `#` and spaces are trimmed from the content.
pub(crate) fn try_parse_atx_heading(line: &Line, attribute_lists: bool) -> Option<Block> {
    let text = line.text();
    if text.len() < 2 {
        return None;
    }

    let level = text.bytes().take_while(|&b| b == b'#').count();
    if level > 6 {
        return None;
    }

    let content = text.trim_matches(|c| c == '#' || c == ' ');
    let (content, attributes) = if attribute_lists {
        match try_parse_heading_attributes(content) {
            Some((attrs, before)) => (before, Some(attrs)),
            None => (content, None),
        }
    } else {
        (content, None)
    };

    log::trace!("ATX heading level {}: {}", level, content);

    Some(Block::new(
        BlockKind::Header,
        BlockBody::Heading {
            level,
            text: content.to_string(),
            attributes,
        },
    ))
}

/// Try to turn the open paragraph into a setext heading. The underline must
/// consist solely of the marker character: `=` for level 1, `-` for level 2.
pub(crate) fn try_parse_setext_heading(
    line: &Line,
    current: Option<&Block>,
    attribute_lists: bool,
) -> Option<Block> {
    let paragraph = open_paragraph(current)?;

    let text = line.text();
    let underline = text.chars().next()?;
    if !text.chars().all(|c| c == underline) {
        return None;
    }

    let level = if underline == '=' { 1 } else { 2 };

    let (content, attributes) = if attribute_lists {
        match try_parse_setext_attributes(paragraph) {
            Some((attrs, before)) => (before, Some(attrs)),
            None => (paragraph, None),
        }
    } else {
        (paragraph, None)
    };

    Some(Block::new(
        BlockKind::SetextHeader,
        BlockBody::Heading {
            level,
            text: content.to_string(),
            attributes,
        },
    ))
}
