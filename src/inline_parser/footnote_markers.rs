//! Footnote markers `[^label]` (extended dialect).
//!
//! Each marker resolved against a definition records one more use of the
//! footnote; the first use assigns its number.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::definitions::DefinitionTable;
use crate::node::{Content, RenderNode};

static MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[\^(.+?)\]").unwrap());

pub fn try_parse_footnote_marker(
    text: &str,
    definitions: &mut DefinitionTable,
) -> Option<InlineMatch> {
    let caps = MARKER.captures(text)?;
    let footnote = definitions.reference_footnote(caps.get(1)?.as_str())?;

    let link = RenderNode::element("a", Content::Text(footnote.number.to_string()))
        .with_attribute("href", Some(format!("#fn:{}", footnote.label)))
        .with_attribute("class", Some("footnote-ref"));
    let marker = RenderNode::element("sup", Content::Spans(vec![link])).with_attribute(
        "id",
        Some(format!("fnref{}:{}", footnote.count, footnote.label)),
    );

    Some(InlineMatch::node(caps.get(0)?.len(), marker))
}
