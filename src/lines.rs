//! Line normalization: newline unification, tab expansion and indent measurement.

use unicode_width::UnicodeWidthStr;

const TAB_STOP: usize = 4;

/// A single input line prepared for block recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line with tabs expanded, including leading spaces.
    pub body: String,
    /// Number of leading U+0020 characters.
    pub indent: usize,
}

impl Line {
    pub fn new(raw: &str) -> Self {
        let body = expand_tabs(raw);
        let indent = body.bytes().take_while(|&b| b == b' ').count();
        Self { body, indent }
    }

    /// The body without its leading spaces.
    pub fn text(&self) -> &str {
        &self.body[self.indent..]
    }

    /// First significant character, used as the block marker.
    pub fn marker(&self) -> Option<char> {
        self.text().chars().next()
    }

    /// The body with up to `n` leading spaces removed.
    pub fn dedent(&self, n: usize) -> &str {
        &self.body[self.indent.min(n)..]
    }
}

/// Unify line endings, trim surrounding newlines and split into raw lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = normalized.trim_matches('\n');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(str::to_string).collect()
}

/// Expand each tab to the next multiple-of-four column, measured in display width.
pub fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut parts = line.split('\t');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let shortage = TAB_STOP - out.width() % TAB_STOP;
        out.extend(std::iter::repeat_n(' ', shortage));
        out.push_str(part);
    }
    out
}

/// A line that contains nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim_end().is_empty()
}
