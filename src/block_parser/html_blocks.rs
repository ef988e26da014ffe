//! Raw HTML blocks and comments.
//!
//! Only recognized while raw markup is allowed. In the extended dialect a
//! block whose root element carries `markdown="1"` has its inner HTML
//! converted as a separate document.

use std::sync::LazyLock;

use regex::Regex;

use super::{Block, BlockBody, MAX_NESTING};
use crate::engine::Engine;
use crate::lines::Line;
use crate::registry::BlockKind;

/// An attribute inside a tag: name with an optional quoted or bare value.
pub(crate) const ATTRIBUTE: &str =
    r#"[a-zA-Z_:][\w:.-]*(?:\s*=\s*(?:[^"'=<>`\s]+|"[^"]*"|'[^']*'))?"#;

/// An opening tag at the start of the text. Group 1 is the name, group 2
/// the self-closing slash.
pub(crate) static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^<(\w[\w-]*)(?:[ ]*{})*[ ]*(/)?>", ATTRIBUTE)).unwrap()
});
static CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^</(\w[\w-]*)\s*>").unwrap());
static MARKDOWN_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s+markdown\s*=\s*(?:"1"|'1'|1\b)"#).unwrap());

/// Inline-level tags never open an HTML block.
pub(crate) const TEXT_LEVEL_ELEMENTS: &[&str] = &[
    "a", "br", "bdo", "abbr", "blink", "nextid", "acronym", "basefont", "b", "em", "big", "cite",
    "small", "spacer", "listing", "i", "rp", "del", "code", "strike", "marquee", "q", "rt", "ins",
    "font", "strong", "s", "tt", "kbd", "mark", "u", "xm", "sub", "nobr", "sup", "ruby", "var",
    "span", "wbr", "time",
];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "link", "meta", "param",
    "source",
];

fn is_text_level(name: &str) -> bool {
    TEXT_LEVEL_ELEMENTS.contains(&name.to_ascii_lowercase().as_str())
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// HTML block state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock {
    /// Root tag name as written.
    pub name: String,
    /// Nesting depth of same-named elements opened on later lines.
    pub depth: usize,
    pub closed: bool,
    /// Void or self-closing root; never post-processed.
    pub void: bool,
    pub markup: String,
}

pub(crate) fn try_parse_comment(line: &Line) -> Option<Block> {
    let text = line.text();
    if !text.starts_with("<!--") {
        return None;
    }

    Some(Block::new(
        BlockKind::Comment,
        BlockBody::Comment {
            markup: line.body.clone(),
            closed: text.ends_with("-->"),
        },
    ))
}

pub(crate) fn continue_comment(
    markup: &mut String,
    closed: &mut bool,
    line: &Line,
    interrupted: &mut bool,
) -> bool {
    if *closed {
        return false;
    }
    if *interrupted {
        markup.push('\n');
        *interrupted = false;
    }
    markup.push('\n');
    markup.push_str(&line.body);
    if line.text().ends_with("-->") {
        *closed = true;
    }
    true
}

/// `text` ends with `</name>` plus optional spaces, compared case-insensitively.
fn ends_with_close_tag(text: &str, name: &str) -> bool {
    let trimmed = text.trim_end_matches(' ').to_ascii_lowercase();
    trimmed.ends_with(&format!("</{}>", name.to_ascii_lowercase()))
}

pub(crate) fn try_parse_html_block(line: &Line) -> Option<Block> {
    let text = line.text();
    let caps = OPEN_TAG.captures(text)?;
    let name = caps.get(1)?.as_str();
    if is_text_level(name) {
        return None;
    }

    let self_closing = caps.get(2).is_some() || is_void(name);
    let remainder = &text[caps.get(0)?.end()..];

    let mut html = HtmlBlock {
        name: name.to_string(),
        depth: 0,
        closed: false,
        void: false,
        markup: text.to_string(),
    };

    if remainder.trim().is_empty() {
        if self_closing {
            html.closed = true;
            html.void = true;
        }
    } else {
        if self_closing {
            return None;
        }
        if ends_with_close_tag(remainder, name) {
            html.closed = true;
        }
    }

    log::trace!("HTML block <{}> closed={}", html.name, html.closed);
    Some(Block::new(BlockKind::RawMarkup, BlockBody::Markup(html)))
}

/// Does `text` start with a non-self-closing opening tag named `name`?
fn opens_same_element(text: &str, name: &str) -> bool {
    OPEN_TAG.captures(text).is_some_and(|caps| {
        caps.get(2).is_none() && caps[1].eq_ignore_ascii_case(name)
    })
}

pub(crate) fn continue_html_block(html: &mut HtmlBlock, line: &Line, interrupted: &mut bool) -> bool {
    if html.closed {
        return false;
    }

    let text = line.text();
    if opens_same_element(text, &html.name) {
        html.depth += 1;
    }
    if ends_with_close_tag(text, &html.name) {
        if html.depth > 0 {
            html.depth -= 1;
        } else {
            html.closed = true;
        }
    }

    if *interrupted {
        html.markup.push('\n');
        *interrupted = false;
    }
    html.markup.push('\n');
    html.markup.push_str(&line.body);
    true
}

pub(crate) fn complete_html_block(html: &mut HtmlBlock, engine: &Engine, depth: usize) {
    if !html.void {
        html.markup = process_tag(&html.markup, engine, depth);
    }
}

/// Byte offsets of the inner end and close end of the element named `name`
/// whose opening tag ends at `from`. Comments are skipped.
fn element_end(markup: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut pos = from;

    while let Some(offset) = markup[pos..].find('<') {
        pos += offset;
        let rest = &markup[pos..];

        if rest.starts_with("<!--") {
            pos += rest.find("-->").map_or(rest.len(), |end| end + 3);
            continue;
        }

        if let Some(caps) = CLOSE_TAG.captures(rest)
            && caps[1].eq_ignore_ascii_case(name)
        {
            let len = caps[0].len();
            if depth == 0 {
                return Some((pos, pos + len));
            }
            depth -= 1;
            pos += len;
            continue;
        }

        if opens_same_element(rest, name) {
            depth += 1;
        }
        pos += 1;
    }

    None
}

/// Rebuild an HTML fragment, converting the content of every element
/// marked `markdown="1"`. Other content is kept verbatim, as is everything
/// below the nesting limit.
pub(crate) fn process_tag(markup: &str, engine: &Engine, depth: usize) -> String {
    if depth >= MAX_NESTING {
        return markup.to_string();
    }
    let Some(caps) = OPEN_TAG.captures(markup) else {
        return markup.to_string();
    };
    let name = &caps[1];
    let open_end = caps[0].len();
    if caps.get(2).is_some() || is_void(name) {
        return markup.to_string();
    }

    let (inner_end, close_end) =
        element_end(markup, name, open_end).unwrap_or((markup.len(), markup.len()));
    let open_tag = &markup[..open_end];
    let inner = &markup[open_end..inner_end];
    let close_tag = if close_end > inner_end {
        markup[inner_end..close_end].to_string()
    } else {
        format!("</{}>", name)
    };
    let trailing = &markup[close_end..];

    if MARKDOWN_ATTR.is_match(open_tag) {
        log::debug!("Converting markdown inside <{}>", name);
        let open_tag = MARKDOWN_ATTR.replace(open_tag, "");
        let converted = engine.parse_nested(inner, depth + 1);
        return format!("{}\n{}\n{}{}", open_tag, converted, close_tag, trailing);
    }

    format!(
        "{}{}{}{}",
        open_tag,
        process_children(inner, engine, depth + 1),
        close_tag,
        trailing
    )
}

fn process_children(inner: &str, engine: &Engine, depth: usize) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = inner[pos..].find('<') {
        pos += offset;
        let rest = &inner[pos..];

        if rest.starts_with("<!--") {
            pos += rest.find("-->").map_or(rest.len(), |end| end + 3);
            continue;
        }

        let Some(caps) = OPEN_TAG.captures(rest) else {
            pos += 1;
            continue;
        };
        let name = &caps[1];
        let open_len = caps[0].len();
        if caps.get(2).is_some() || is_void(name) || is_text_level(name) {
            pos += open_len;
            continue;
        }

        match element_end(rest, name, open_len) {
            Some((_, close_end)) => {
                out.push_str(&inner[copied..pos]);
                out.push_str(&process_tag(&rest[..close_end], engine, depth));
                pos += close_end;
                copied = pos;
            }
            None => break,
        }
    }

    out.push_str(&inner[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, Dialect};

    fn html(block: Block) -> HtmlBlock {
        match block.body {
            BlockBody::Markup(html) => html,
            other => panic!("expected markup, got {:?}", other),
        }
    }

    fn engine() -> Engine {
        Engine::new(
            ConfigBuilder::default()
                .dialect(Dialect::Extended)
                .safe_mode(false)
                .build(),
        )
    }

    #[test]
    fn test_text_level_tags_are_not_blocks() {
        assert!(try_parse_html_block(&Line::new("<span>x</span>")).is_none());
        assert!(try_parse_html_block(&Line::new("<EM>x</EM>")).is_none());
    }

    #[test]
    fn test_same_line_close() {
        let block = html(try_parse_html_block(&Line::new("<div class=\"a\">x</DIV>")).unwrap());
        assert!(block.closed);
        assert!(!block.void);
    }

    #[test]
    fn test_void_root() {
        let block = html(try_parse_html_block(&Line::new("<hr/>")).unwrap());
        assert!(block.closed && block.void);
        assert!(try_parse_html_block(&Line::new("<hr> trailing")).is_none());
    }

    #[test]
    fn test_nested_depth() {
        let mut block = html(try_parse_html_block(&Line::new("<div>")).unwrap());
        let mut interrupted = false;
        for line in ["<div>", "</div>"] {
            assert!(continue_html_block(&mut block, &Line::new(line), &mut interrupted));
        }
        assert!(!block.closed);
        assert!(continue_html_block(&mut block, &Line::new("</div>"), &mut interrupted));
        assert!(block.closed);
        assert!(!continue_html_block(&mut block, &Line::new("after"), &mut interrupted));
        assert_eq!(block.markup, "<div>\n<div>\n</div>\n</div>");
    }

    #[test]
    fn test_comment_block() {
        let block = try_parse_comment(&Line::new("<!-- a")).unwrap();
        let BlockBody::Comment {
            mut markup,
            mut closed,
        } = block.body
        else {
            unreachable!()
        };
        let mut interrupted = false;
        assert!(continue_comment(&mut markup, &mut closed, &Line::new("b -->"), &mut interrupted));
        assert!(closed);
        assert_eq!(markup, "<!-- a\nb -->");
    }

    #[test]
    fn test_element_end_skips_nested_and_comments() {
        let markup = "<div><!-- </div> --><div></div>x</div>tail";
        let (inner_end, close_end) = element_end(markup, "div", 5).unwrap();
        assert_eq!(&markup[inner_end..close_end], "</div>");
        assert_eq!(&markup[close_end..], "tail");
    }

    #[test]
    fn test_process_tag_converts_marked_root() {
        let out = process_tag("<div markdown=\"1\">\n*hi*\n</div>", &engine(), 0);
        assert_eq!(out, "<div>\n<p><i>hi</i></p>\n</div>");
    }

    #[test]
    fn test_process_tag_recurses_into_children() {
        let out = process_tag(
            "<section>\n<div markdown=\"1\">**b**</div>\n<span>*x*</span>\n</section>",
            &engine(),
            0,
        );
        assert_eq!(
            out,
            "<section>\n<div>\n<p><strong>b</strong></p>\n</div>\n<span>*x*</span>\n</section>"
        );
    }

    #[test]
    fn test_process_tag_leaves_unmarked_markup() {
        let markup = "<div>\n*hi*\n</div>";
        assert_eq!(process_tag(markup, &engine(), 0), markup);
    }

    #[test]
    fn test_process_tag_stops_at_nesting_limit() {
        let markup = "<div markdown=\"1\">\n*hi*\n</div>";
        assert_eq!(process_tag(markup, &engine(), MAX_NESTING), markup);
    }

    #[test]
    fn test_deeply_nested_markdown_blocks_terminate() {
        let depth = 10_000;
        let input = format!(
            "{}x{}",
            "<div markdown=\"1\">".repeat(depth),
            "</div>".repeat(depth)
        );
        let html = engine().parse(&input);
        assert!(html.starts_with("<div>"));
        assert!(html.ends_with("</div>"));
    }
}
