//! Pipe tables: a paragraph line with `|` followed by a divider line.

use std::sync::LazyLock;

use regex::Regex;

use super::paragraphs::open_paragraph;
use super::{Block, BlockBody};
use crate::lines::Line;
use crate::node::{Content, RenderNode};
use crate::registry::BlockKind;

/// One cell: escaped pipes, code spans and plain characters; an unescaped
/// `|` outside a code span ends the cell.
static ROW_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\\[|]|[^|`]|`[^`]+`|`)+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    fn style(self) -> String {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        };
        format!("text-align: {};", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Per-column alignment from the divider line.
    pub alignments: Vec<Option<Alignment>>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub(crate) fn into_node(self) -> RenderNode {
        let alignments = self.alignments;
        let cell = |name: &str, index: usize, text: String| {
            RenderNode::element(name, Content::Inline(text)).with_attribute(
                "style",
                alignments.get(index).copied().flatten().map(Alignment::style),
            )
        };

        let header_row = RenderNode::element(
            "tr",
            Content::Children(
                self.header
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| cell("th", i, text))
                    .collect(),
            ),
        );
        let body_rows = self
            .rows
            .into_iter()
            .map(|row| {
                RenderNode::element(
                    "tr",
                    Content::Children(
                        row.into_iter()
                            .enumerate()
                            .map(|(i, text)| cell("td", i, text))
                            .collect(),
                    ),
                )
            })
            .collect();

        RenderNode::element(
            "table",
            Content::Children(vec![
                RenderNode::element("thead", Content::Children(vec![header_row])),
                RenderNode::element("tbody", Content::Children(body_rows)),
            ]),
        )
    }
}

/// Strip surrounding whitespace, then outer pipes.
fn trim_row(text: &str) -> &str {
    text.trim().trim_matches('|')
}

/// Parse the divider line into column alignments. Every column needs a `-`.
fn try_parse_divider(text: &str) -> Option<Vec<Option<Alignment>>> {
    if !text.chars().all(|c| matches!(c, ' ' | '-' | ':' | '|')) {
        return None;
    }

    let mut alignments = Vec::new();
    for cell in trim_row(text).split('|') {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if !cell.contains('-') {
            return None;
        }
        let left = cell.starts_with(':');
        let right = cell.ends_with(':');
        alignments.push(match (left, right) {
            (true, true) => Some(Alignment::Center),
            (true, false) => Some(Alignment::Left),
            (false, true) => Some(Alignment::Right),
            (false, false) => None,
        });
    }

    (!alignments.is_empty()).then_some(alignments)
}

/// Try to reinterpret the open paragraph as a table header.
pub(crate) fn try_parse_table(line: &Line, current: Option<&Block>) -> Option<Block> {
    let paragraph = open_paragraph(current)?;
    if !paragraph.contains('|') {
        return None;
    }

    let alignments = try_parse_divider(line.text())?;
    let header = trim_row(paragraph)
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect();

    log::trace!("Table with {} columns", alignments.len());

    Some(Block::new(
        BlockKind::Table,
        BlockBody::Table(TableBlock {
            alignments,
            header,
            rows: Vec::new(),
        }),
    ))
}

fn split_row(text: &str) -> Vec<String> {
    ROW_CELL
        .find_iter(trim_row(text))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

pub(crate) fn continue_table(table: &mut TableBlock, line: &Line, interrupted: bool) -> bool {
    if interrupted || !line.text().contains('|') {
        return false;
    }
    table.rows.push(split_row(line.text()));
    true
}
