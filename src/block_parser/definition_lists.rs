//! Definition lists (extended dialect).
//!
//! ```markdown
//! Term one
//! Term two
//! : Definition
//!     continued
//! : Another definition
//! ```
//!
//! Every line of the preceding paragraph becomes a term. A definition that
//! follows a blank line, or contains one, renders as nested blocks.

use super::{Block, BlockBody};
use crate::lines::Line;
use crate::node::{Content, RenderNode};
use crate::registry::BlockKind;

#[derive(Debug, Clone)]
pub enum DefinitionItem {
    Term(String),
    Description {
        text: String,
        /// Rendered as nested blocks rather than a single line.
        block_level: bool,
        /// Filled when the list closes, for block-level descriptions.
        blocks: Vec<Block>,
    },
}

/// Text of an open paragraph, interrupted or not.
fn paragraph_text(current: Option<&Block>) -> Option<&str> {
    match current {
        Some(Block {
            body: BlockBody::Paragraph { text },
            ..
        }) => Some(text.as_str()),
        _ => None,
    }
}

fn description(line: &Line, block_level: bool) -> DefinitionItem {
    DefinitionItem::Description {
        text: line.text()[1..].trim().to_string(),
        block_level,
        blocks: Vec::new(),
    }
}

pub(crate) fn try_parse_definition_list(line: &Line, current: Option<&Block>) -> Option<Block> {
    let terms = paragraph_text(current)?;
    if !line.text().starts_with(':') {
        return None;
    }
    let interrupted = current.is_some_and(|block| block.interrupted);

    let mut items: Vec<DefinitionItem> = terms
        .split('\n')
        .map(|term| DefinitionItem::Term(term.to_string()))
        .collect();
    items.push(description(line, interrupted));

    Some(Block::new(
        BlockKind::DefinitionList,
        BlockBody::DefinitionList { items },
    ))
}

pub(crate) fn continue_definition_list(
    items: &mut Vec<DefinitionItem>,
    line: &Line,
    interrupted: &mut bool,
) -> bool {
    if line.text().starts_with(':') {
        items.push(description(line, *interrupted));
        *interrupted = false;
        return true;
    }

    if *interrupted && line.indent == 0 {
        return false;
    }

    let Some(DefinitionItem::Description {
        text, block_level, ..
    }) = items.last_mut()
    else {
        return false;
    };

    if *interrupted {
        *block_level = true;
        text.push_str("\n\n");
        *interrupted = false;
    }
    text.push('\n');
    text.push_str(line.dedent(4));
    true
}

pub(crate) fn definition_list_node(items: Vec<DefinitionItem>) -> RenderNode {
    let children = items
        .into_iter()
        .map(|item| match item {
            DefinitionItem::Term(term) => RenderNode::element("dt", Content::Inline(term)),
            DefinitionItem::Description {
                text,
                block_level: false,
                ..
            } => RenderNode::element("dd", Content::Inline(text)),
            DefinitionItem::Description { blocks, .. } => {
                RenderNode::element("dd", Content::Blocks(blocks))
            }
        })
        .collect();
    RenderNode::element("dl", Content::Children(children))
}
