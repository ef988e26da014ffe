//! The footnote section appended after the document.

use super::Renderer;
use crate::block_parser::Block;
use crate::definitions::Footnote;
use crate::node::{Content, RenderNode};

impl Renderer<'_> {
    /// `div.footnotes > hr + ol > li`, one item per referenced footnote in
    /// number order. Rendering an item may reference further footnotes; they
    /// are picked up by the same loop.
    pub(super) fn footnote_section(&mut self) -> Option<RenderNode> {
        let mut items = Vec::new();
        let mut number = 1;
        while let Some(footnote) = self.definitions.footnote_by_number(number).cloned() {
            items.push(self.footnote_item(footnote));
            number += 1;
        }

        if items.is_empty() {
            return None;
        }
        log::debug!("Rendering {} footnotes", items.len());

        Some(
            RenderNode::element(
                "div",
                Content::Children(vec![
                    RenderNode::element("hr", Content::Empty),
                    RenderNode::element("ol", Content::Children(items)),
                ]),
            )
            .with_attribute("class", Some("footnotes")),
        )
    }

    fn footnote_item(&mut self, footnote: Footnote) -> RenderNode {
        let mut nodes: Vec<RenderNode> = footnote
            .blocks
            .into_iter()
            .filter_map(Block::into_node)
            .collect();
        let last_paragraph = match nodes.last() {
            Some(last) if last.name.as_deref() == Some("p") => nodes.pop(),
            _ => None,
        };

        // The body is rendered first so markers inside it, including uses of
        // this footnote, are counted before the backreferences are built.
        let mut markup = self.render_children(nodes);
        let mut spans = Vec::new();
        if let Some(last) = last_paragraph {
            let text = self.render_node(RenderNode::fragment(last.content));
            spans.push(RenderNode::raw(text).allowing_raw());
            spans.push(RenderNode::raw("&#160;").allowing_raw());
        }
        let count = self
            .definitions
            .footnote(&footnote.label)
            .map_or(footnote.count, |f| f.count);
        spans.extend(backreferences(&footnote.label, count));
        markup.push_str(&self.render_node(RenderNode::element("p", Content::Spans(spans))));
        markup.push('\n');

        RenderNode::element("li", Content::Raw(markup))
            .allowing_raw()
            .with_attribute("id", Some(format!("fn:{}", footnote.label)))
    }
}

/// One `&#8617;` link per use of the footnote, separated by spaces.
fn backreferences(label: &str, count: usize) -> Vec<RenderNode> {
    let mut spans = Vec::new();
    for use_number in 1..=count {
        if use_number > 1 {
            spans.push(RenderNode::text(" "));
        }
        spans.push(
            RenderNode::element("a", Content::Raw("&#8617;".to_string()))
                .allowing_raw()
                .with_attribute("href", Some(format!("#fnref{}:{}", use_number, label)))
                .with_attribute("rev", Some("footnote"))
                .with_attribute("class", Some("footnote-backref")),
        );
    }
    spans
}
