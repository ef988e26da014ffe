//! Paragraph construction and lazy continuation.

use super::{Block, BlockBody};
use crate::registry::BlockKind;

pub(crate) fn paragraph(text: &str) -> Block {
    log::trace!("Starting paragraph: {}", text);
    Block::new(
        BlockKind::Paragraph,
        BlockBody::Paragraph {
            text: text.to_string(),
        },
    )
}

/// Text of the open block when it is a paragraph not yet interrupted by a blank line.
pub(crate) fn open_paragraph(current: Option<&Block>) -> Option<&str> {
    match current {
        Some(Block {
            interrupted: false,
            body: BlockBody::Paragraph { text },
            ..
        }) => Some(text.as_str()),
        _ => None,
    }
}

/// Lazy continuation: an uninterrupted paragraph absorbs the line.
pub(crate) fn try_extend_paragraph(current: &mut Block, text: &str) -> bool {
    if current.interrupted {
        return false;
    }
    match &mut current.body {
        BlockBody::Paragraph { text: existing } => {
            existing.push('\n');
            existing.push_str(text);
            true
        }
        _ => false,
    }
}
