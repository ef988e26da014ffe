//! Parsing for attribute lists: {#id .class1 .class2}
//!
//! Attribute lists can trail ATX and setext headings, or directly follow
//! a link or image.
//!
//! Rules:
//! - Surrounded by { }
//! - Identifier: #id (the last one wins)
//! - Classes: .class (can have multiple, joined with spaces on output)
//! - Names consist of word characters and `-`
//! - Whitespace flexible between items

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Attributes;

static HEADING_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ #]*\{((?:[#.][-\w]+[ ]*)+)\}[ ]*$").unwrap());
static SETEXT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]*\{((?:[#.][-\w]+[ ]*)+)\}[ ]*$").unwrap());
static LEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ ]*\{((?:[#.][-\w]+[ ]*)+)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeBlock {
    pub identifier: Option<String>,
    pub classes: Vec<String>,
}

impl AttributeBlock {
    /// Output attributes: `id` first, then the space-joined `class`.
    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = Vec::new();
        if let Some(id) = &self.identifier {
            attributes.push(("id".to_string(), Some(id.clone())));
        }
        if !self.classes.is_empty() {
            attributes.push(("class".to_string(), Some(self.classes.join(" "))));
        }
        attributes
    }
}

/// Try to parse an attribute list from the end of ATX heading text.
/// Returns: (attribute_block, text_before_attributes)
pub fn try_parse_heading_attributes(text: &str) -> Option<(AttributeBlock, &str)> {
    trailing(&HEADING_SUFFIX, text)
}

/// Try to parse an attribute list from the end of setext heading text.
pub fn try_parse_setext_attributes(text: &str) -> Option<(AttributeBlock, &str)> {
    trailing(&SETEXT_SUFFIX, text)
}

/// Try to parse an attribute list at the start of `text`.
/// Returns: (attribute_block, bytes_consumed)
pub fn try_parse_leading_attributes(text: &str) -> Option<(AttributeBlock, usize)> {
    let caps = LEADING.captures(text)?;
    let whole = caps.get(0)?;
    let content = caps.get(1)?.as_str();
    Some((parse_attribute_content(content), whole.end()))
}

fn trailing<'t>(pattern: &Regex, text: &'t str) -> Option<(AttributeBlock, &'t str)> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    let content = caps.get(1)?.as_str();
    Some((parse_attribute_content(content), &text[..whole.start()]))
}

/// Parse the content inside the attribute braces. The surrounding pattern
/// guarantees every token starts with `#` or `.`.
fn parse_attribute_content(content: &str) -> AttributeBlock {
    let mut attrs = AttributeBlock::default();

    for token in content.split(' ').filter(|t| !t.is_empty()) {
        if let Some(id) = token.strip_prefix('#') {
            attrs.identifier = Some(id.to_string());
        } else if let Some(class) = token.strip_prefix('.') {
            attrs.classes.push(class.to_string());
        }
    }

    attrs
}
