//! Serialization of render nodes to markup.
//!
//! The renderer owns the definition table for the rest of a parse call:
//! inline text is scanned while the tree is written out, and footnote
//! markers number their footnotes in the order they are rendered.

use std::sync::LazyLock;

use regex::Regex;

use crate::block_parser::Block;
use crate::definitions::DefinitionTable;
use crate::engine::Engine;
use crate::node::{Content, RenderNode};
use crate::registry::InlineKind;

mod footnotes;
mod sanitize;

static DEFINITION_LIST_SEAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</dl>\s+<dl>\s+").unwrap());

pub struct Renderer<'e> {
    pub(crate) engine: &'e Engine,
    pub(crate) definitions: DefinitionTable,
    /// Inline spans currently being rendered inside one another.
    pub(crate) inline_depth: usize,
}

impl<'e> Renderer<'e> {
    pub fn new(engine: &'e Engine, definitions: DefinitionTable) -> Self {
        Self {
            engine,
            definitions,
            inline_depth: 0,
        }
    }

    /// Render the top-level blocks of a document, followed by the footnote
    /// section when any footnote was referenced.
    pub fn render_document(mut self, blocks: Vec<Block>) -> String {
        let engine = self.engine;
        let registry = engine.registry();

        let markup = self.render_blocks(blocks);
        let mut markup = markup.trim_matches('\n').to_string();

        if registry.merge_definition_lists {
            markup = DEFINITION_LIST_SEAM.replace_all(&markup, "").into_owned();
        }

        if registry.footnotes
            && let Some(section) = self.footnote_section()
        {
            markup.push('\n');
            markup.push_str(&self.render_node(section));
        }

        markup
    }

    /// Each visible block on its own line, with a trailing newline.
    pub(crate) fn render_blocks(&mut self, blocks: Vec<Block>) -> String {
        let mut markup = String::new();
        for node in blocks.into_iter().filter_map(Block::into_node) {
            markup.push('\n');
            markup.push_str(&self.render_node(node));
        }
        markup.push('\n');
        markup
    }

    pub(crate) fn render_node(&mut self, mut node: RenderNode) -> String {
        let safe_mode = self.engine.config().safe_mode;
        let permit_raw = !safe_mode || node.allow_raw_in_safe_mode;

        let Some(name) = node.name.take() else {
            return self.render_content(node.content, &node.non_nestables, permit_raw);
        };

        if safe_mode {
            sanitize::sanitize_attributes(&name, &mut node.attributes);
        }

        let mut markup = format!("<{}", name);
        for (key, value) in &node.attributes {
            let Some(value) = value else {
                continue;
            };
            markup.push_str(&format!(
                " {}=\"{}\"",
                key,
                html_escape::encode_quoted_attribute(value)
            ));
        }

        if matches!(node.content, Content::Empty) {
            markup.push_str(" />");
            return markup;
        }

        markup.push('>');
        markup.push_str(&self.render_content(node.content, &node.non_nestables, permit_raw));
        markup.push_str(&format!("</{}>", name));
        markup
    }

    fn render_content(
        &mut self,
        content: Content,
        non_nestables: &[InlineKind],
        permit_raw: bool,
    ) -> String {
        match content {
            Content::Inline(text) => self.parse_inline(&text, non_nestables),
            Content::Blocks(blocks) => self.render_blocks(blocks),
            Content::ListItem { blocks, tight } => self.render_list_item(blocks, tight),
            Content::Children(children) => self.render_children(children),
            Content::Spans(spans) => spans
                .into_iter()
                .map(|span| self.render_node(span))
                .collect(),
            Content::Text(text) => html_escape::encode_text(&text).into_owned(),
            Content::Raw(markup) if permit_raw => markup,
            Content::Raw(markup) => html_escape::encode_text(&markup).into_owned(),
            Content::Empty => String::new(),
        }
    }

    pub(crate) fn render_children(&mut self, children: Vec<RenderNode>) -> String {
        let mut markup = String::new();
        for child in children {
            markup.push('\n');
            markup.push_str(&self.render_node(child));
        }
        markup.push('\n');
        markup
    }

    /// A tight item drops the `<p>` wrapper of its leading paragraph.
    fn render_list_item(&mut self, blocks: Vec<Block>, tight: bool) -> String {
        let markup = self.render_blocks(blocks);
        let trimmed = markup.trim();

        if tight && let Some(inner) = trimmed.strip_prefix("<p>") {
            return inner.replacen("</p>", "", 1);
        }
        markup
    }
}
