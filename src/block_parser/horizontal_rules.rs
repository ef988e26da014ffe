//! Horizontal rule parsing utilities.

use super::{Block, BlockBody};
use crate::lines::Line;
use crate::registry::BlockKind;

/// Try to parse a horizontal rule from a line.
///
/// A horizontal rule is 3 or more copies of the marker character,
/// optionally separated and followed by spaces.
pub(crate) fn try_parse_rule(line: &Line) -> Option<Block> {
    let text = line.text();
    let rule_char = text.chars().next()?;

    let mut count = 0;
    for ch in text.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' => continue,
            _ => return None,
        }
    }

    if count >= 3 {
        Some(Block::new(BlockKind::Rule, BlockBody::Rule))
    } else {
        None
    }
}
