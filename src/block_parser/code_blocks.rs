//! Indented and fenced code blocks.

use super::paragraphs::open_paragraph;
use super::{Block, BlockBody};
use crate::lines::Line;
use crate::node::{Content, RenderNode};
use crate::registry::BlockKind;

const CODE_INDENT: usize = 4;

/// Fenced code block state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode {
    /// Fence character: '`' or '~'.
    pub fence: char,
    /// First word of the info string.
    pub language: Option<String>,
    pub text: String,
    /// A closing fence was seen.
    pub closed: bool,
}

/// Indented code. A line indented four or more spaces directly after an
/// open paragraph is a lazy continuation instead.
pub(crate) fn try_parse_indented_code(line: &Line, current: Option<&Block>) -> Option<Block> {
    if open_paragraph(current).is_some() || line.indent < CODE_INDENT {
        return None;
    }

    Some(Block::new(
        BlockKind::Code,
        BlockBody::Code {
            text: line.body[CODE_INDENT..].to_string(),
        },
    ))
}

pub(crate) fn continue_indented_code(text: &mut String, line: &Line, interrupted: &mut bool) -> bool {
    if line.indent < CODE_INDENT {
        return false;
    }

    if *interrupted {
        text.push('\n');
        *interrupted = false;
    }
    text.push('\n');
    text.push_str(&line.body[CODE_INDENT..]);
    true
}

/// Count the leading run of `fence` characters.
fn fence_run(text: &str, fence: char) -> usize {
    text.chars().take_while(|&c| c == fence).count()
}

/// Try to parse an opening fence: three or more '`' or '~' and an optional
/// info string without backticks.
pub(crate) fn try_parse_fenced_code(line: &Line) -> Option<Block> {
    let text = line.text();
    let fence = text.chars().next()?;
    if fence != '`' && fence != '~' {
        return None;
    }

    let run = fence_run(text, fence);
    if run < 3 {
        return None;
    }

    let info = &text[run..];
    if info.contains('`') {
        return None;
    }

    let language = info
        .trim_start_matches(' ')
        .split([' ', '\t', '\n', '\x0c', '\r'])
        .next()
        .filter(|word| !word.is_empty())
        .map(str::to_string);

    log::trace!("Opening {} fence, language {:?}", fence, language);

    Some(Block::new(
        BlockKind::FencedCode,
        BlockBody::FencedCode(FencedCode {
            fence,
            language,
            text: String::new(),
            closed: false,
        }),
    ))
}

fn is_closing_fence(text: &str, fence: char) -> bool {
    let run = fence_run(text, fence);
    run >= 3 && text[run..].chars().all(|c| c == ' ')
}

pub(crate) fn continue_fenced_code(
    fenced: &mut FencedCode,
    line: &Line,
    interrupted: &mut bool,
) -> bool {
    if fenced.closed {
        return false;
    }

    if *interrupted {
        fenced.text.push('\n');
        *interrupted = false;
    }

    if is_closing_fence(line.text(), fenced.fence) {
        strip_leading_newline(&mut fenced.text);
        fenced.closed = true;
        return true;
    }

    fenced.text.push('\n');
    fenced.text.push_str(&line.body);
    true
}

/// An unterminated fence runs to the end of its container.
pub(crate) fn complete_fenced_code(fenced: &mut FencedCode) {
    if !fenced.closed {
        strip_leading_newline(&mut fenced.text);
    }
}

fn strip_leading_newline(text: &mut String) {
    if text.starts_with('\n') {
        text.remove(0);
    }
}

pub(crate) fn code_node(text: String, language: Option<String>) -> RenderNode {
    let code = RenderNode::element("code", Content::Text(text))
        .with_attribute("class", language.map(|lang| format!("language-{}", lang)));
    RenderNode::element("pre", Content::Spans(vec![code]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::paragraphs::paragraph;

    #[test]
    fn test_indented_code_after_paragraph_is_lazy() {
        let line = Line::new("    code");
        let open = paragraph("text");
        assert!(try_parse_indented_code(&line, Some(&open)).is_none());
        assert!(try_parse_indented_code(&line, None).is_some());
    }

    #[test]
    fn test_indented_code_keeps_blank_lines() {
        let mut text = "a".to_string();
        let mut interrupted = true;
        assert!(continue_indented_code(&mut text, &Line::new("      b"), &mut interrupted));
        assert_eq!(text, "a\n\n  b");
        assert!(!interrupted);
        assert!(!continue_indented_code(&mut text, &Line::new("  c"), &mut interrupted));
    }

    #[test]
    fn test_fence_language_is_first_word() {
        let block = try_parse_fenced_code(&Line::new("```rust ignore")).unwrap();
        match block.body {
            BlockBody::FencedCode(f) => assert_eq!(f.language.as_deref(), Some("rust")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fence_rejects_backticks_in_info() {
        assert!(try_parse_fenced_code(&Line::new("``` a`b")).is_none());
        assert!(try_parse_fenced_code(&Line::new("``")).is_none());
        assert!(try_parse_fenced_code(&Line::new("~~~ a`b")).is_none());
    }

    #[test]
    fn test_closing_fence_must_match_character() {
        let mut fenced = FencedCode {
            fence: '~',
            language: None,
            text: String::new(),
            closed: false,
        };
        let mut interrupted = false;
        assert!(continue_fenced_code(&mut fenced, &Line::new("```"), &mut interrupted));
        assert!(continue_fenced_code(&mut fenced, &Line::new("~~~~  "), &mut interrupted));
        assert!(fenced.closed);
        assert_eq!(fenced.text, "```");
        assert!(!continue_fenced_code(&mut fenced, &Line::new("more"), &mut interrupted));
    }

    #[test]
    fn test_unterminated_fence_is_completed() {
        let mut fenced = FencedCode {
            fence: '`',
            language: None,
            text: "\nline one\nline two".to_string(),
            closed: false,
        };
        complete_fenced_code(&mut fenced);
        assert_eq!(fenced.text, "line one\nline two");
    }
}
