//! Marker tables for block and inline recognition.
//!
//! The base dialect is a fixed table. The extended dialect is the base table
//! with [`Overlay::EXTENDED`] applied once at engine construction.

use crate::config::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Header,
    SetextHeader,
    Rule,
    List,
    Quote,
    Code,
    FencedCode,
    Table,
    Comment,
    RawMarkup,
    Reference,
    Footnote,
    Abbreviation,
    DefinitionList,
}

impl BlockKind {
    /// Kinds with a rule for extending the block with following lines.
    pub fn is_continuable(self) -> bool {
        matches!(
            self,
            BlockKind::Code
                | BlockKind::Comment
                | BlockKind::FencedCode
                | BlockKind::List
                | BlockKind::Quote
                | BlockKind::RawMarkup
                | BlockKind::Table
                | BlockKind::Footnote
                | BlockKind::DefinitionList
        )
    }

    /// Kinds with a finalize step run once continuation ends.
    pub fn is_completable(self) -> bool {
        matches!(
            self,
            BlockKind::FencedCode | BlockKind::List | BlockKind::RawMarkup | BlockKind::Footnote
        )
    }

    /// Kinds that consume the open paragraph instead of closing it.
    pub fn absorbs_paragraph(self) -> bool {
        matches!(
            self,
            BlockKind::SetextHeader | BlockKind::Table | BlockKind::DefinitionList
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Code,
    Emphasis,
    EmailTag,
    EscapeSequence,
    FootnoteMarker,
    Image,
    Link,
    Markup,
    SpecialCharacter,
    Strikethrough,
    Url,
    UrlTag,
}

const INLINE_MARKERS: &str = "!\"*_&[:<>`~\\";

const BASE_BLOCKS: &[(char, &[BlockKind])] = &[
    ('#', &[BlockKind::Header]),
    ('*', &[BlockKind::Rule, BlockKind::List]),
    ('+', &[BlockKind::Rule, BlockKind::List]),
    (
        '-',
        &[
            BlockKind::SetextHeader,
            BlockKind::Table,
            BlockKind::Rule,
            BlockKind::List,
        ],
    ),
    ('0', &[BlockKind::List]),
    ('1', &[BlockKind::List]),
    ('2', &[BlockKind::List]),
    ('3', &[BlockKind::List]),
    ('4', &[BlockKind::List]),
    ('5', &[BlockKind::List]),
    ('6', &[BlockKind::List]),
    ('7', &[BlockKind::List]),
    ('8', &[BlockKind::List]),
    ('9', &[BlockKind::List]),
    (':', &[BlockKind::Table]),
    ('<', &[BlockKind::Comment, BlockKind::RawMarkup]),
    ('=', &[BlockKind::SetextHeader]),
    ('>', &[BlockKind::Quote]),
    ('[', &[BlockKind::Reference]),
    ('_', &[BlockKind::Rule]),
    ('`', &[BlockKind::FencedCode]),
    ('|', &[BlockKind::Table]),
    ('~', &[BlockKind::FencedCode]),
];

const BASE_UNMARKED_BLOCKS: &[BlockKind] = &[BlockKind::Code];

const BASE_INLINES: &[(char, &[InlineKind])] = &[
    ('"', &[InlineKind::SpecialCharacter]),
    ('!', &[InlineKind::Image]),
    ('&', &[InlineKind::SpecialCharacter]),
    ('*', &[InlineKind::Emphasis]),
    (':', &[InlineKind::Url]),
    (
        '<',
        &[
            InlineKind::UrlTag,
            InlineKind::EmailTag,
            InlineKind::Markup,
            InlineKind::SpecialCharacter,
        ],
    ),
    ('>', &[InlineKind::SpecialCharacter]),
    ('[', &[InlineKind::Link]),
    ('_', &[InlineKind::Emphasis]),
    ('`', &[InlineKind::Code]),
    ('~', &[InlineKind::Strikethrough]),
    ('\\', &[InlineKind::EscapeSequence]),
];

/// Additions layered over the base registry.
#[derive(Debug, Clone, Copy)]
pub struct Overlay {
    pub append_blocks: &'static [(char, BlockKind)],
    pub prepend_blocks: &'static [(char, BlockKind)],
    pub prepend_inlines: &'static [(char, InlineKind)],
    /// `{#id .class}` suffixes on headings and links.
    pub attribute_lists: bool,
    /// Re-enter `markdown="1"` HTML blocks into the pipeline.
    pub markdown_in_html: bool,
    /// Append the footnote section after the document.
    pub footnotes: bool,
    /// Fuse adjacent definition lists.
    pub merge_definition_lists: bool,
}

impl Overlay {
    pub const EXTENDED: Overlay = Overlay {
        append_blocks: &[
            (':', BlockKind::DefinitionList),
            ('*', BlockKind::Abbreviation),
        ],
        prepend_blocks: &[('[', BlockKind::Footnote)],
        prepend_inlines: &[('[', InlineKind::FootnoteMarker)],
        attribute_lists: true,
        markdown_in_html: true,
        footnotes: true,
        merge_definition_lists: true,
    };
}

#[derive(Debug, Clone)]
pub struct Registry {
    blocks: Vec<(char, Vec<BlockKind>)>,
    unmarked_blocks: Vec<BlockKind>,
    inlines: Vec<(char, Vec<InlineKind>)>,
    inline_markers: &'static str,
    pub attribute_lists: bool,
    pub markdown_in_html: bool,
    pub footnotes: bool,
    pub merge_definition_lists: bool,
}

impl Registry {
    pub fn base() -> Self {
        Self {
            blocks: BASE_BLOCKS
                .iter()
                .map(|(marker, kinds)| (*marker, kinds.to_vec()))
                .collect(),
            unmarked_blocks: BASE_UNMARKED_BLOCKS.to_vec(),
            inlines: BASE_INLINES
                .iter()
                .map(|(marker, kinds)| (*marker, kinds.to_vec()))
                .collect(),
            inline_markers: INLINE_MARKERS,
            attribute_lists: false,
            markdown_in_html: false,
            footnotes: false,
            merge_definition_lists: false,
        }
    }

    pub fn extended() -> Self {
        let mut registry = Self::base();
        registry.apply(&Overlay::EXTENDED);
        registry
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Base => Self::base(),
            Dialect::Extended => Self::extended(),
        }
    }

    pub fn apply(&mut self, overlay: &Overlay) {
        for &(marker, kind) in overlay.append_blocks {
            marker_entry(&mut self.blocks, marker).push(kind);
        }
        for &(marker, kind) in overlay.prepend_blocks {
            marker_entry(&mut self.blocks, marker).insert(0, kind);
        }
        for &(marker, kind) in overlay.prepend_inlines {
            marker_entry(&mut self.inlines, marker).insert(0, kind);
        }
        self.attribute_lists |= overlay.attribute_lists;
        self.markdown_in_html |= overlay.markdown_in_html;
        self.footnotes |= overlay.footnotes;
        self.merge_definition_lists |= overlay.merge_definition_lists;
    }

    /// Block kinds to try for a line: the always-tried kinds, then the marker's list.
    pub fn block_candidates(&self, marker: Option<char>) -> Vec<BlockKind> {
        let mut kinds = self.unmarked_blocks.clone();
        if let Some(marker) = marker
            && let Some((_, listed)) = self.blocks.iter().find(|(m, _)| *m == marker)
        {
            kinds.extend_from_slice(listed);
        }
        kinds
    }

    /// Inline handlers registered for a marker, in priority order.
    pub fn inline_handlers(&self, marker: char) -> &[InlineKind] {
        self.inlines
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, kinds)| kinds.as_slice())
            .unwrap_or(&[])
    }

    pub fn inline_markers(&self) -> &str {
        self.inline_markers
    }
}

fn marker_entry<K>(table: &mut Vec<(char, Vec<K>)>, marker: char) -> &mut Vec<K> {
    let index = match table.iter().position(|(m, _)| *m == marker) {
        Some(i) => i,
        None => {
            table.push((marker, Vec::new()));
            table.len() - 1
        }
    };
    &mut table[index].1
}
