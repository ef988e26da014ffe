//! Abbreviation expansion over literal text (extended dialect).

use regex::Regex;

use crate::definitions::Abbreviation;
use crate::node::{Content, RenderNode};

#[derive(Debug)]
pub(super) enum TextPiece {
    Text(String),
    Abbreviation(RenderNode),
}

/// Split `text` on whole-word occurrences of each term, one definition at a
/// time in definition order. Text already wrapped is not searched again.
pub(super) fn split_abbreviations<'d>(
    text: &str,
    abbreviations: impl Iterator<Item = &'d Abbreviation>,
) -> Vec<TextPiece> {
    let mut pieces = vec![TextPiece::Text(text.to_string())];

    for abbreviation in abbreviations {
        let Some(pattern) = abbreviation.pattern() else {
            continue;
        };
        pieces = pieces
            .into_iter()
            .flat_map(|piece| match piece {
                TextPiece::Text(literal) => split_one(&literal, pattern, abbreviation),
                wrapped => vec![wrapped],
            })
            .collect();
    }

    pieces
}

fn split_one(text: &str, pattern: &Regex, abbreviation: &Abbreviation) -> Vec<TextPiece> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            pieces.push(TextPiece::Text(text[last..found.start()].to_string()));
        }
        pieces.push(TextPiece::Abbreviation(
            RenderNode::element("abbr", Content::Text(abbreviation.term.clone()))
                .with_attribute("title", Some(abbreviation.meaning.clone())),
        ));
        last = found.end();
    }
    if last < text.len() {
        pieces.push(TextPiece::Text(text[last..].to_string()));
    }
    pieces
}
