//! Per-parse registry of link references, footnotes and abbreviations.
//!
//! Populated while blocks are scanned, then read (and for footnotes, numbered)
//! while the document renders. A fresh table is created for every parse call.

use std::collections::HashMap;

use regex::Regex;

use crate::block_parser::Block;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub url: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Footnote {
    /// Label as written in the definition, used for element ids.
    pub label: String,
    pub text: String,
    /// The text scanned into blocks when the definition closed.
    pub blocks: Vec<Block>,
    /// Number of markers that referenced this footnote so far.
    pub count: usize,
    /// Sequence number assigned on first reference.
    pub number: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Abbreviation {
    pub term: String,
    pub meaning: String,
    pattern: Option<Regex>,
}

impl Abbreviation {
    fn new(term: &str, meaning: &str) -> Self {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(term))).ok();
        Self {
            term: term.to_string(),
            meaning: meaning.to_string(),
            pattern,
        }
    }

    /// Whole-word pattern for the term, if it compiled.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

/// A marker resolved against a footnote definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteRef {
    pub label: String,
    pub count: usize,
    pub number: usize,
}

/// Insertion-ordered map keyed by a normalized label. Redefinitions replace
/// the payload but keep the original position.
#[derive(Debug, Clone)]
struct OrderedMap<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    fn insert(&mut self, key: String, value: T) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index.get(key).map(|&i| &mut self.entries[i].1)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    references: OrderedMap<Reference>,
    footnotes: OrderedMap<Footnote>,
    abbreviations: OrderedMap<Abbreviation>,
    footnote_count: usize,
}

fn fold(label: &str) -> String {
    label.to_lowercase()
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_reference(&mut self, label: &str, url: &str, title: Option<&str>) {
        log::debug!("Registered reference [{}] -> {}", label, url);
        self.references.insert(
            fold(label),
            Reference {
                url: url.to_string(),
                title: title.map(str::to_string),
            },
        );
    }

    pub fn reference(&self, label: &str) -> Option<&Reference> {
        self.references.get(&fold(label))
    }

    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    pub fn insert_footnote(&mut self, label: &str, text: &str, blocks: Vec<Block>) {
        log::debug!("Registered footnote [^{}]", label);
        self.footnotes.insert(
            fold(label),
            Footnote {
                label: label.to_string(),
                text: text.to_string(),
                blocks,
                count: 0,
                number: None,
            },
        );
    }

    pub fn footnote(&self, label: &str) -> Option<&Footnote> {
        self.footnotes.get(&fold(label))
    }

    /// Record one use of a footnote. The first use assigns the next sequence number.
    pub fn reference_footnote(&mut self, label: &str) -> Option<FootnoteRef> {
        let footnote = self.footnotes.get_mut(&fold(label))?;
        footnote.count += 1;
        let number = match footnote.number {
            Some(n) => n,
            None => {
                self.footnote_count += 1;
                footnote.number = Some(self.footnote_count);
                log::debug!("Footnote [^{}] numbered {}", footnote.label, self.footnote_count);
                self.footnote_count
            }
        };
        Some(FootnoteRef {
            label: footnote.label.clone(),
            count: footnote.count,
            number,
        })
    }

    pub fn footnote_by_number(&self, number: usize) -> Option<&Footnote> {
        self.footnotes.values().find(|f| f.number == Some(number))
    }

    /// Footnotes that have been referenced, ordered by their number.
    pub fn numbered_footnotes(&self) -> Vec<Footnote> {
        let mut numbered: Vec<Footnote> = self
            .footnotes
            .values()
            .filter(|f| f.number.is_some())
            .cloned()
            .collect();
        numbered.sort_by_key(|f| f.number);
        numbered
    }

    pub fn insert_abbreviation(&mut self, term: &str, meaning: &str) {
        log::debug!("Registered abbreviation {} = {}", term, meaning);
        self.abbreviations
            .insert(term.to_string(), Abbreviation::new(term, meaning));
    }

    /// Abbreviations in definition order.
    pub fn abbreviations(&self) -> impl Iterator<Item = &Abbreviation> {
        self.abbreviations.values()
    }

    pub fn has_abbreviations(&self) -> bool {
        self.abbreviations.len() > 0
    }
}
