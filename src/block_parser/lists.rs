//! Bullet and ordered lists.
//!
//! Items collect raw lines; their content is scanned as nested blocks when
//! the list closes. A blank line between items makes the whole list loose.

use super::reference_definitions::try_parse_reference;
use super::{Block, BlockBody};
use crate::definitions::DefinitionTable;
use crate::lines::Line;
use crate::node::{Content, RenderNode};
use crate::registry::BlockKind;

#[derive(Debug, Clone)]
pub struct ListItem {
    pub lines: Vec<String>,
    pub blocks: Vec<Block>,
}

impl ListItem {
    fn new(first: &str) -> Self {
        Self {
            lines: vec![first.to_string()],
            blocks: Vec::new(),
        }
    }

    /// Items without an empty line render their first paragraph unwrapped.
    pub fn is_tight(&self) -> bool {
        !self.lines.iter().any(String::is_empty)
    }
}

#[derive(Debug, Clone)]
pub struct ListBlock {
    pub ordered: bool,
    /// Start number of an ordered list, when it is not "1".
    pub start: Option<String>,
    /// Indent of the first marker; sibling items must match it.
    pub indent: usize,
    pub items: Vec<ListItem>,
    pub loose: bool,
}

impl ListBlock {
    pub(crate) fn into_node(self) -> RenderNode {
        let name = if self.ordered { "ol" } else { "ul" };
        let items = self
            .items
            .into_iter()
            .map(|item| {
                let tight = item.is_tight();
                RenderNode::element(
                    "li",
                    Content::ListItem {
                        blocks: item.blocks,
                        tight,
                    },
                )
            })
            .collect();
        RenderNode::element(name, Content::Children(items)).with_attribute("start", self.start)
    }
}

/// Length of the list marker at the start of `text`: one of `*+-` for
/// bullet lists, digits followed by `.` for ordered lists.
fn marker_len(text: &str, ordered: bool) -> Option<usize> {
    let bytes = text.as_bytes();
    if ordered {
        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        (digits > 0 && bytes.get(digits) == Some(&b'.')).then_some(digits + 1)
    } else {
        matches!(bytes.first(), Some(b'*' | b'+' | b'-')).then_some(1)
    }
}

fn skip_spaces(text: &str) -> &str {
    text.trim_start_matches(' ')
}

pub(crate) fn try_parse_list(line: &Line) -> Option<Block> {
    let text = line.text();
    let ordered = text.chars().next()? > '-';
    let len = marker_len(text, ordered)?;

    let after = &text[len..];
    if !after.starts_with(' ') {
        return None;
    }

    let start = if ordered {
        let number = &text[..len - 1];
        (number != "1").then(|| number.to_string())
    } else {
        None
    };

    log::trace!("Opening {} list", if ordered { "ordered" } else { "bullet" });

    Some(Block::new(
        BlockKind::List,
        BlockBody::List(ListBlock {
            ordered,
            start,
            indent: line.indent,
            items: vec![ListItem::new(skip_spaces(after))],
            loose: false,
        }),
    ))
}

/// Content of a sibling item line, if `line` starts a new item.
fn sibling_item<'l>(list: &ListBlock, line: &'l Line) -> Option<&'l str> {
    if line.indent != list.indent {
        return None;
    }
    let text = line.text();
    let len = marker_len(text, list.ordered)?;
    let after = &text[len..];
    if after.is_empty() {
        Some("")
    } else if after.starts_with(' ') {
        Some(skip_spaces(after))
    } else {
        None
    }
}

pub(crate) fn continue_list(
    list: &mut ListBlock,
    line: &Line,
    interrupted: &mut bool,
    definitions: &mut DefinitionTable,
) -> bool {
    if let Some(content) = sibling_item(list, line) {
        if *interrupted {
            if let Some(last) = list.items.last_mut() {
                last.lines.push(String::new());
            }
            list.loose = true;
            *interrupted = false;
        }
        list.items.push(ListItem::new(content));
        return true;
    }

    if line.marker() == Some('[') && try_parse_reference(line, definitions).is_some() {
        return true;
    }

    let Some(item) = list.items.last_mut() else {
        return false;
    };

    if !*interrupted {
        item.lines.push(line.dedent(4).to_string());
        return true;
    }

    if line.indent > 0 {
        item.lines.push(String::new());
        item.lines.push(line.dedent(4).to_string());
        *interrupted = false;
        return true;
    }

    false
}

/// A loose list ends every item with an empty line so each item's content
/// renders as paragraphs.
pub(crate) fn complete_list(list: &mut ListBlock) {
    if !list.loose {
        return;
    }
    for item in &mut list.items {
        if item.lines.last().is_some_and(|l| !l.is_empty()) {
            item.lines.push(String::new());
        }
    }
}
