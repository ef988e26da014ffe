//! Block quotes: `>`-prefixed lines plus lazy continuation lines.

use super::{Block, BlockBody};
use crate::lines::Line;
use crate::registry::BlockKind;

/// Strip the `>` marker and at most one following space.
fn strip_marker(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

pub(crate) fn try_parse_blockquote(line: &Line) -> Option<Block> {
    let content = strip_marker(line.text())?;
    Some(Block::new(
        BlockKind::Quote,
        BlockBody::Quote {
            lines: vec![content.to_string()],
            blocks: Vec::new(),
        },
    ))
}

/// A quoted line always continues; a blank line before it is kept so the
/// nested content splits into separate blocks. Unquoted lines continue
/// lazily unless a blank line intervened.
pub(crate) fn continue_blockquote(
    lines: &mut Vec<String>,
    line: &Line,
    interrupted: &mut bool,
) -> bool {
    if let Some(content) = strip_marker(line.text()) {
        if *interrupted {
            lines.push(String::new());
            *interrupted = false;
        }
        lines.push(content.to_string());
        return true;
    }

    if !*interrupted {
        lines.push(line.text().to_string());
        return true;
    }

    false
}
