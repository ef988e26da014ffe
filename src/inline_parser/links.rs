//! Links and images.
//!
//! Supported forms:
//! - Inline: `[text](url)`, `[text](url "title")`, `[text](url 'title')`
//! - Full reference: `[text][label]`
//! - Collapsed and shortcut reference: `[text][]`, `[text]`
//! - Images: any of the above prefixed with `!`
//!
//! Reference labels are matched case-insensitively against the definition
//! table, which already holds every definition of the document. In the
//! extended dialect an attribute list such as `{#id .class}` may follow.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::block_parser::attributes::try_parse_leading_attributes;
use crate::definitions::DefinitionTable;
use crate::node::{Attributes, Content, RenderNode};
use crate::registry::InlineKind;

static INLINE_DESTINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\(\s*((?:[^ ()]+|\([^ )]+\))+)(?:[ ]+("[^"]*"|'[^']*'))?\s*\)"#).unwrap()
});
static REFERENCE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[(.*?)\]").unwrap());

/// Deeper bracket nesting is never link text.
const MAX_BRACKET_DEPTH: usize = 32;

/// A recognized link before it becomes a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts {
    /// Bytes consumed, including any attribute list.
    pub extent: usize,
    pub text: String,
    pub href: String,
    pub title: Option<String>,
    /// Attributes from a trailing attribute list.
    pub extra: Attributes,
}

/// Find the bracketed link text at the start of `text`, honoring nested
/// brackets. Returns (bytes consumed, inner text).
pub fn find_link_text(text: &str) -> Option<(usize, &str)> {
    if !text.starts_with('[') {
        return None;
    }

    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'[' => {
                depth += 1;
                if depth > MAX_BRACKET_DEPTH {
                    return None;
                }
            }
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some((i + 1, &text[1..i]));
                }
            }
            _ => {}
        }
    }
    None
}

pub fn try_parse_link_parts(
    text: &str,
    definitions: &DefinitionTable,
    attribute_lists: bool,
) -> Option<LinkParts> {
    let (mut extent, link_text) = find_link_text(text)?;
    let remainder = &text[extent..];

    let (href, title) = if let Some(caps) = INLINE_DESTINATION.captures(remainder) {
        let href = caps.get(1)?.as_str();
        // Leading whitespace belongs to the opening parenthesis.
        if href.starts_with(char::is_whitespace) {
            return None;
        }
        extent += caps.get(0)?.len();
        let title = caps.get(2).map(|m| {
            let quoted = m.as_str();
            quoted[1..quoted.len() - 1].to_string()
        });
        (href.to_string(), title)
    } else {
        let label = match REFERENCE_LABEL.captures(remainder) {
            Some(caps) => {
                extent += caps.get(0)?.len();
                let label = caps.get(1)?.as_str();
                if label.is_empty() { link_text } else { label }
            }
            None => link_text,
        };
        let reference = definitions.reference(label)?;
        (reference.url.clone(), reference.title.clone())
    };

    let mut extra = Attributes::new();
    if attribute_lists
        && let Some((attributes, consumed)) = try_parse_leading_attributes(&text[extent..])
    {
        extra = attributes.to_attributes();
        extent += consumed;
    }

    Some(LinkParts {
        extent,
        text: link_text.to_string(),
        href,
        title,
        extra,
    })
}

pub fn try_parse_link(
    text: &str,
    definitions: &DefinitionTable,
    attribute_lists: bool,
) -> Option<InlineMatch> {
    let parts = try_parse_link_parts(text, definitions, attribute_lists)?;
    log::trace!("Link to {} ({} bytes)", parts.href, parts.extent);

    let mut node = RenderNode::element("a", Content::Inline(parts.text))
        .with_attribute("href", Some(parts.href))
        .with_attribute("title", parts.title)
        .with_non_nestables(&[InlineKind::Url, InlineKind::Link]);
    node.merge_missing_attributes(parts.extra);

    Some(InlineMatch::node(parts.extent, node))
}

/// `![alt](src)`: the link's text becomes `alt`, its target `src`.
pub fn try_parse_image(
    text: &str,
    definitions: &DefinitionTable,
    attribute_lists: bool,
) -> Option<InlineMatch> {
    let rest = text.strip_prefix('!')?;
    let parts = try_parse_link_parts(rest, definitions, attribute_lists)?;

    let mut node = RenderNode::element("img", Content::Empty)
        .with_attribute("src", Some(parts.href))
        .with_attribute("alt", Some(parts.text))
        .with_attribute("title", parts.title);
    node.merge_missing_attributes(parts.extra);

    Some(InlineMatch::node(parts.extent + 1, node))
}
