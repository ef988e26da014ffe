//! Marker-driven inline scanning.
//!
//! Text is searched for the leftmost inline marker. The handlers registered
//! for that marker are tried in order; the first match is emitted and
//! scanning resumes after it. A marker nothing claims is emitted as literal
//! text. The scan never backtracks.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::RenderNode;
use crate::registry::InlineKind;
use crate::renderer::Renderer;

mod abbreviations;
mod autolinks;
mod code_spans;
mod emphasis;
mod escapes;
mod footnote_markers;
mod links;
mod raw_inline;
mod special_chars;
mod strikeout;

use abbreviations::{TextPiece, split_abbreviations};

/// Spans nested deeper than this are emitted as escaped text.
const MAX_INLINE_NESTING: usize = 32;

static SOFT_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]*\n").unwrap());
static HARD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[ ][ ]+|[ ]*\\)\n").unwrap());

/// What an inline handler produced.
#[derive(Debug)]
pub(crate) enum InlineOutput {
    /// Literal markup, emitted as is.
    Markup(String),
    Node(RenderNode),
}

#[derive(Debug)]
pub(crate) struct InlineMatch {
    /// Bytes consumed, counted from `position`.
    pub extent: usize,
    /// Start of the match when it does not begin at the marker.
    pub position: Option<usize>,
    pub output: InlineOutput,
}

impl InlineMatch {
    pub(crate) fn markup(extent: usize, markup: impl Into<String>) -> Self {
        Self {
            extent,
            position: None,
            output: InlineOutput::Markup(markup.into()),
        }
    }

    pub(crate) fn node(extent: usize, node: RenderNode) -> Self {
        Self {
            extent,
            position: None,
            output: InlineOutput::Node(node),
        }
    }
}

impl Renderer<'_> {
    /// Render inline text. Handlers listed in `non_nestables` are skipped,
    /// and every node produced here inherits them.
    pub(crate) fn parse_inline(&mut self, text: &str, non_nestables: &[InlineKind]) -> String {
        if self.inline_depth >= MAX_INLINE_NESTING {
            log::debug!("Inline nesting limit reached, emitting {} bytes as text", text.len());
            let literal = html_escape::encode_text(text);
            return self.line_breaks(&literal);
        }

        self.inline_depth += 1;
        let markup = self.scan_inline(text, non_nestables);
        self.inline_depth -= 1;
        markup
    }

    fn scan_inline(&mut self, text: &str, non_nestables: &[InlineKind]) -> String {
        log::trace!(
            "Parsing inline text: {:?} ({} bytes)",
            text.chars().take(40).collect::<String>(),
            text.len()
        );

        let engine = self.engine;
        let registry = engine.registry();
        let markers: Vec<char> = registry.inline_markers().chars().collect();

        let mut markup = String::new();
        let mut text = text;

        'scan: while let Some(marker_position) = text.find(markers.as_slice()) {
            let excerpt = &text[marker_position..];
            let marker = char::from(excerpt.as_bytes()[0]);

            for &kind in registry.inline_handlers(marker) {
                if non_nestables.contains(&kind) {
                    continue;
                }
                let Some(inline) = self.try_inline(kind, excerpt, text) else {
                    continue;
                };
                // The match must belong to this marker.
                if inline.position.is_some_and(|p| p > marker_position) {
                    continue;
                }

                log::trace!("Matched {:?} at {}", kind, marker_position);
                let position = inline.position.unwrap_or(marker_position);
                let rendered = self.unmarked_text(&text[..position]);
                markup.push_str(&rendered);
                match inline.output {
                    InlineOutput::Markup(literal) => markup.push_str(&literal),
                    InlineOutput::Node(node) => {
                        let rendered = self.render_node(node.with_non_nestables(non_nestables));
                        markup.push_str(&rendered);
                    }
                }
                text = &text[position + inline.extent..];
                continue 'scan;
            }

            // Markers are ASCII, so the marker is one byte.
            let rendered = self.unmarked_text(&text[..=marker_position]);
            markup.push_str(&rendered);
            text = &text[marker_position + 1..];
        }

        let rendered = self.unmarked_text(text);
        markup.push_str(&rendered);
        markup
    }

    fn try_inline(&mut self, kind: InlineKind, excerpt: &str, context: &str) -> Option<InlineMatch> {
        let engine = self.engine;
        let config = engine.config();
        let attribute_lists = engine.registry().attribute_lists;

        match kind {
            InlineKind::Code => code_spans::try_parse_code_span(excerpt),
            InlineKind::Emphasis => emphasis::try_parse_emphasis(excerpt),
            InlineKind::EmailTag => autolinks::try_parse_email_tag(excerpt),
            InlineKind::EscapeSequence => escapes::try_parse_escape(excerpt),
            InlineKind::FootnoteMarker => {
                footnote_markers::try_parse_footnote_marker(excerpt, &mut self.definitions)
            }
            InlineKind::Image => links::try_parse_image(excerpt, &self.definitions, attribute_lists),
            InlineKind::Link => links::try_parse_link(excerpt, &self.definitions, attribute_lists),
            InlineKind::Markup if config.raw_markup_allowed() => {
                raw_inline::try_parse_markup(excerpt)
            }
            InlineKind::Markup => None,
            InlineKind::SpecialCharacter => special_chars::try_parse_special_character(excerpt),
            InlineKind::Strikethrough => strikeout::try_parse_strikeout(excerpt),
            InlineKind::Url if config.urls_linked => autolinks::try_parse_url(excerpt, context),
            InlineKind::Url => None,
            InlineKind::UrlTag => autolinks::try_parse_url_tag(excerpt),
        }
    }

    /// Literal text between matches: abbreviations, then line breaks.
    fn unmarked_text(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if !self.definitions.has_abbreviations() {
            return self.line_breaks(text);
        }

        let pieces = split_abbreviations(text, self.definitions.abbreviations());
        let mut markup = String::new();
        for piece in pieces {
            match piece {
                TextPiece::Text(literal) => markup.push_str(&self.line_breaks(&literal)),
                TextPiece::Abbreviation(node) => markup.push_str(&self.render_node(node)),
            }
        }
        markup
    }

    fn line_breaks(&self, text: &str) -> String {
        if self.engine.config().breaks_enabled {
            SOFT_BREAK.replace_all(text, "<br />\n").into_owned()
        } else {
            HARD_BREAK
                .replace_all(text, "<br />\n")
                .replace(" \n", "\n")
        }
    }
}
