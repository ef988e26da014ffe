//! Reference and abbreviation definitions.
//!
//! Reference definitions have the form:
//! ```markdown
//! [label]: url "optional title"
//! [label]: url 'optional title'
//! [label]: url (optional title)
//! [label]: <url> "title"
//! ```
//!
//! Abbreviation definitions (extended dialect):
//! ```markdown
//! *[HTML]: Hyper Text Markup Language
//! ```
//!
//! Both register into the definition table and produce hidden blocks.

use std::sync::LazyLock;

use regex::Regex;

use super::{Block, BlockBody};
use crate::definitions::DefinitionTable;
use crate::lines::Line;
use crate::registry::BlockKind;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\[(.+?)\]:[ ]*<?(\S+?)>?(?:[ ]+["'(](.+)["')])?[ ]*$"#).unwrap()
});
static ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\[(.+?)\]:[ ]*(.+?)[ ]*$").unwrap());

pub(crate) fn try_parse_reference(line: &Line, definitions: &mut DefinitionTable) -> Option<Block> {
    let text = line.text();
    if !text.contains("]:") {
        return None;
    }

    let caps = REFERENCE.captures(text)?;
    let label = caps.get(1)?.as_str();
    let url = caps.get(2)?.as_str();
    let title = caps.get(3).map(|m| m.as_str());

    definitions.insert_reference(label, url, title);
    Some(Block::hidden(BlockKind::Reference, BlockBody::Definition))
}

pub(crate) fn try_parse_abbreviation(
    line: &Line,
    definitions: &mut DefinitionTable,
) -> Option<Block> {
    let caps = ABBREVIATION.captures(line.text())?;
    let term = caps.get(1)?.as_str();
    let meaning = caps.get(2)?.as_str();

    definitions.insert_abbreviation(term, meaning);
    Some(Block::hidden(BlockKind::Abbreviation, BlockBody::Definition))
}
