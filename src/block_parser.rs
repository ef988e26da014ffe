//! Line-oriented block recognition.
//!
//! Lines are consumed one at a time. The open block is offered each line
//! first; when it declines, the kinds registered for the line's marker are
//! tried in order and the first match becomes the new open block. Lines that
//! match nothing continue or start a paragraph.

use crate::definitions::DefinitionTable;
use crate::engine::Engine;
use crate::lines::{Line, is_blank};
use crate::node::{Content, RenderNode};
use crate::registry::BlockKind;

pub(crate) mod attributes;
mod blockquotes;
mod code_blocks;
mod definition_lists;
mod footnotes;
mod headings;
mod horizontal_rules;
pub(crate) mod html_blocks;
mod lists;
mod paragraphs;
mod reference_definitions;
mod tables;

pub use code_blocks::FencedCode;
pub use definition_lists::DefinitionItem;
pub use html_blocks::HtmlBlock;
pub use lists::{ListBlock, ListItem};
pub use tables::{Alignment, TableBlock};

/// Containers nested deeper than this are kept as paragraph text.
pub(crate) const MAX_NESTING: usize = 64;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A recognized block and its scan state.
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    /// A blank line followed the block's last line.
    pub interrupted: bool,
    /// Definitions produce no output.
    pub hidden: bool,
    pub continuable: bool,
    pub body: BlockBody,
}

#[derive(Debug, Clone)]
pub enum BlockBody {
    Paragraph {
        text: String,
    },
    Heading {
        level: usize,
        text: String,
        attributes: Option<attributes::AttributeBlock>,
    },
    Rule,
    List(ListBlock),
    Quote {
        lines: Vec<String>,
        blocks: Vec<Block>,
    },
    Code {
        text: String,
    },
    FencedCode(FencedCode),
    Table(TableBlock),
    Comment {
        markup: String,
        closed: bool,
    },
    Markup(HtmlBlock),
    Footnote {
        label: String,
        text: String,
    },
    DefinitionList {
        items: Vec<DefinitionItem>,
    },
    /// Reference or abbreviation definition, already registered.
    Definition,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, body: BlockBody) -> Self {
        Self {
            kind,
            interrupted: false,
            hidden: false,
            continuable: kind.is_continuable(),
            body,
        }
    }

    pub(crate) fn hidden(kind: BlockKind, body: BlockBody) -> Self {
        Self {
            hidden: true,
            ..Self::new(kind, body)
        }
    }

    /// The render tree for this block; `None` for hidden blocks.
    pub fn into_node(self) -> Option<RenderNode> {
        if self.hidden {
            return None;
        }
        let node = match self.body {
            BlockBody::Paragraph { text } => RenderNode::element("p", Content::Inline(text)),
            BlockBody::Heading {
                level,
                text,
                attributes,
            } => {
                let node = RenderNode::element(format!("h{}", level), Content::Inline(text));
                match attributes {
                    Some(attrs) => node.with_attributes(attrs.to_attributes()),
                    None => node,
                }
            }
            BlockBody::Rule => RenderNode::element("hr", Content::Empty),
            BlockBody::List(list) => list.into_node(),
            BlockBody::Quote { blocks, .. } => {
                RenderNode::element("blockquote", Content::Blocks(blocks))
            }
            BlockBody::Code { text } => code_blocks::code_node(text, None),
            BlockBody::FencedCode(fenced) => code_blocks::code_node(fenced.text, fenced.language),
            BlockBody::Table(table) => table.into_node(),
            BlockBody::Comment { markup, .. } => RenderNode::raw(markup).allowing_raw(),
            BlockBody::Markup(html) => RenderNode::raw(html.markup).allowing_raw(),
            BlockBody::DefinitionList { items } => definition_lists::definition_list_node(items),
            BlockBody::Footnote { .. } | BlockBody::Definition => return None,
        };
        Some(node)
    }
}

pub struct BlockParser<'a> {
    engine: &'a Engine,
    lines: &'a [String],
    definitions: &'a mut DefinitionTable,
    blocks: Vec<Block>,
    current: Option<Block>,
    /// Number of enclosing containers.
    depth: usize,
}

impl<'a> BlockParser<'a> {
    pub fn new(engine: &'a Engine, lines: &'a [String], definitions: &'a mut DefinitionTable) -> Self {
        Self::nested(engine, lines, definitions, 0)
    }

    pub(crate) fn nested(
        engine: &'a Engine,
        lines: &'a [String],
        definitions: &'a mut DefinitionTable,
        depth: usize,
    ) -> Self {
        Self {
            engine,
            lines,
            definitions,
            blocks: Vec::new(),
            current: None,
            depth,
        }
    }

    pub fn parse(mut self) -> Vec<Block> {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let lines = self.lines;
        for raw in lines {
            self.parse_line(raw);
        }

        if let Some(mut block) = self.current.take() {
            if block.continuable && block.kind.is_completable() {
                self.complete(&mut block);
            }
            self.push(block);
        }

        self.blocks
    }

    fn parse_line(&mut self, raw: &str) {
        if is_blank(raw) {
            if let Some(current) = self.current.as_mut() {
                current.interrupted = true;
            }
            return;
        }

        let line = Line::new(raw);

        if let Some(mut current) = self.current.take() {
            if current.continuable {
                if self.continue_block(&mut current, &line) {
                    self.current = Some(current);
                    return;
                }
                log::trace!("{:?} block ended before {:?}", current.kind, line.text());
                if current.kind.is_completable() {
                    self.complete(&mut current);
                }
            }
            self.current = Some(current);
        }

        let engine = self.engine;
        for kind in engine.registry().block_candidates(line.marker()) {
            if let Some(block) = self.identify(kind, &line) {
                log::debug!("Identified {:?} block", kind);
                if !kind.absorbs_paragraph() {
                    self.flush();
                }
                self.current = Some(block);
                return;
            }
        }

        if let Some(current) = self.current.as_mut()
            && paragraphs::try_extend_paragraph(current, line.text())
        {
            return;
        }

        self.flush();
        self.current = Some(paragraphs::paragraph(line.text()));
    }

    fn identify(&mut self, kind: BlockKind, line: &Line) -> Option<Block> {
        let engine = self.engine;
        let config = engine.config();
        let attribute_lists = engine.registry().attribute_lists;
        let current = self.current.as_ref();

        match kind {
            BlockKind::Paragraph => None,
            BlockKind::Code => code_blocks::try_parse_indented_code(line, current),
            BlockKind::FencedCode => code_blocks::try_parse_fenced_code(line),
            BlockKind::Header => headings::try_parse_atx_heading(line, attribute_lists),
            BlockKind::SetextHeader => {
                headings::try_parse_setext_heading(line, current, attribute_lists)
            }
            BlockKind::Rule => horizontal_rules::try_parse_rule(line),
            BlockKind::List => lists::try_parse_list(line),
            BlockKind::Quote => blockquotes::try_parse_blockquote(line),
            BlockKind::Table => tables::try_parse_table(line, current),
            BlockKind::Comment if config.raw_markup_allowed() => {
                html_blocks::try_parse_comment(line)
            }
            BlockKind::RawMarkup if config.raw_markup_allowed() => {
                html_blocks::try_parse_html_block(line)
            }
            BlockKind::Comment | BlockKind::RawMarkup => None,
            BlockKind::Reference => {
                reference_definitions::try_parse_reference(line, self.definitions)
            }
            BlockKind::Abbreviation => {
                reference_definitions::try_parse_abbreviation(line, self.definitions)
            }
            BlockKind::Footnote => footnotes::try_parse_footnote(line),
            BlockKind::DefinitionList => {
                definition_lists::try_parse_definition_list(line, current)
            }
        }
    }

    /// Offer a line to the open block. Returns false, leaving the block
    /// untouched apart from registered definitions, when the line does not belong to it.
    fn continue_block(&mut self, block: &mut Block, line: &Line) -> bool {
        let interrupted = &mut block.interrupted;
        match &mut block.body {
            BlockBody::Code { text } => code_blocks::continue_indented_code(text, line, interrupted),
            BlockBody::FencedCode(fenced) => {
                code_blocks::continue_fenced_code(fenced, line, interrupted)
            }
            BlockBody::List(list) => {
                lists::continue_list(list, line, interrupted, self.definitions)
            }
            BlockBody::Quote { lines, .. } => {
                blockquotes::continue_blockquote(lines, line, interrupted)
            }
            BlockBody::Table(table) => tables::continue_table(table, line, *interrupted),
            BlockBody::Comment { markup, closed } => {
                html_blocks::continue_comment(markup, closed, line, interrupted)
            }
            BlockBody::Markup(html) => html_blocks::continue_html_block(html, line, interrupted),
            BlockBody::Footnote { text, .. } => {
                footnotes::continue_footnote(text, line, interrupted)
            }
            BlockBody::DefinitionList { items } => {
                definition_lists::continue_definition_list(items, line, interrupted)
            }
            BlockBody::Paragraph { .. }
            | BlockBody::Heading { .. }
            | BlockBody::Rule
            | BlockBody::Definition => false,
        }
    }

    /// Finalize step, run once when continuation ends.
    fn complete(&mut self, block: &mut Block) {
        log::trace!("Completing {:?} block", block.kind);
        match &mut block.body {
            BlockBody::FencedCode(fenced) => code_blocks::complete_fenced_code(fenced),
            BlockBody::List(list) => lists::complete_list(list),
            BlockBody::Markup(html) if self.engine.registry().markdown_in_html => {
                html_blocks::complete_html_block(html, self.engine, self.depth)
            }
            BlockBody::Footnote { label, text } => {
                let blocks = self.scan_nested(&footnotes::footnote_lines(text));
                self.definitions.insert_footnote(label, text, blocks);
            }
            _ => {}
        }
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            self.push(block);
        }
    }

    /// Scan the nested content of a closed block so that every definition
    /// it holds is registered before rendering starts.
    fn push(&mut self, mut block: Block) {
        match &mut block.body {
            BlockBody::Quote { lines, blocks } => *blocks = self.scan_nested(lines),
            BlockBody::List(list) => {
                for item in &mut list.items {
                    item.blocks = self.scan_nested(&item.lines);
                }
            }
            BlockBody::DefinitionList { items } => {
                for item in items {
                    if let DefinitionItem::Description {
                        text,
                        block_level: true,
                        blocks,
                    } = item
                    {
                        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
                        *blocks = self.scan_nested(&lines);
                    }
                }
            }
            _ => {}
        }
        self.blocks.push(block);
    }

    fn scan_nested(&mut self, lines: &[String]) -> Vec<Block> {
        let depth = self.depth + 1;
        if depth >= MAX_NESTING {
            log::debug!("Nesting limit reached, keeping {} lines as text", lines.len());
            return literal_paragraph(lines).into_iter().collect();
        }
        BlockParser::nested(self.engine, lines, self.definitions, depth).parse()
    }
}

/// Non-blank lines joined into one paragraph; no markers are recognized.
fn literal_paragraph(lines: &[String]) -> Option<Block> {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    (!text.is_empty()).then(|| paragraphs::paragraph(&text))
}
