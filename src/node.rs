//! The render tree handed from the scanners to the renderer.

use crate::block_parser::Block;
use crate::registry::InlineKind;

/// Ordered attribute list. `None` values are omitted on output.
pub type Attributes = Vec<(String, Option<String>)>;

#[derive(Debug, Clone)]
pub enum Content {
    /// Text re-scanned by the inline parser.
    Inline(String),
    /// Nested blocks, each preceded by a newline.
    Blocks(Vec<Block>),
    /// Blocks of a list item. Tight items lose the wrapping of their first paragraph.
    ListItem { blocks: Vec<Block>, tight: bool },
    /// Child elements, each on its own line.
    Children(Vec<RenderNode>),
    /// Child elements concatenated without separators.
    Spans(Vec<RenderNode>),
    /// Text emitted with `&`, `<` and `>` escaped.
    Text(String),
    /// Markup emitted verbatim when raw HTML is permitted.
    Raw(String),
    /// Void element.
    Empty,
}

#[derive(Debug, Clone)]
pub struct RenderNode {
    /// Output tag; `None` emits only the content.
    pub name: Option<String>,
    pub attributes: Attributes,
    pub content: Content,
    /// Inline kinds that may not match inside this node's text.
    pub non_nestables: Vec<InlineKind>,
    /// Emit `Raw` content verbatim even in safe mode.
    pub allow_raw_in_safe_mode: bool,
}

impl RenderNode {
    pub fn element(name: impl Into<String>, content: Content) -> Self {
        Self {
            name: Some(name.into()),
            attributes: Vec::new(),
            content,
            non_nestables: Vec::new(),
            allow_raw_in_safe_mode: false,
        }
    }

    /// Node without a tag of its own.
    pub fn fragment(content: Content) -> Self {
        Self {
            name: None,
            attributes: Vec::new(),
            content,
            non_nestables: Vec::new(),
            allow_raw_in_safe_mode: false,
        }
    }

    /// Unnamed node carrying verbatim markup.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::fragment(Content::Raw(markup.into()))
    }

    /// Unnamed node carrying escaped text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::fragment(Content::Text(text.into()))
    }

    pub fn with_attribute(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        self.set_attribute(key, value.map(Into::into));
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        for (key, value) in attributes {
            self.set_attribute(&key, value);
        }
        self
    }

    pub fn with_non_nestables(mut self, kinds: &[InlineKind]) -> Self {
        self.non_nestables.extend_from_slice(kinds);
        self
    }

    pub fn allowing_raw(mut self) -> Self {
        self.allow_raw_in_safe_mode = true;
        self
    }

    /// Insert or replace an attribute, keeping its position.
    pub fn set_attribute(&mut self, key: &str, value: Option<String>) {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    /// Add attributes whose names are not yet present.
    pub fn merge_missing_attributes(&mut self, attributes: Attributes) {
        for (key, value) in attributes {
            if !self.has_attribute(&key) {
                self.attributes.push((key, value));
            }
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_keeps_position() {
        let mut node = RenderNode::element("a", Content::Empty)
            .with_attribute("href", Some("x"))
            .with_attribute("title", None::<String>);
        node.set_attribute("href", Some("y".to_string()));
        assert_eq!(node.attributes[0], ("href".to_string(), Some("y".to_string())));
        assert_eq!(node.attribute("title"), None);
        assert!(node.has_attribute("title"));
    }

    #[test]
    fn merge_does_not_override() {
        let mut node = RenderNode::element("a", Content::Empty).with_attribute("id", Some("one"));
        node.merge_missing_attributes(vec![
            ("id".to_string(), Some("two".to_string())),
            ("class".to_string(), Some("c".to_string())),
        ]);
        assert_eq!(node.attribute("id"), Some("one"));
        assert_eq!(node.attribute("class"), Some("c"));
    }
}
