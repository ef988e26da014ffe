//! Backslash escapes: `\` before one of a fixed set of punctuation
//! characters yields that character literally.

use super::InlineMatch;

const ESCAPABLE: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '>', '#', '+', '-', '.', '!', '|',
];

pub fn try_parse_escape(text: &str) -> Option<InlineMatch> {
    let mut chars = text.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let ch = chars.next()?;
    ESCAPABLE
        .contains(&ch)
        .then(|| InlineMatch::markup(2, ch.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline_parser::InlineOutput;

    fn escaped(text: &str) -> Option<String> {
        match try_parse_escape(text)?.output {
            InlineOutput::Markup(markup) => Some(markup),
            InlineOutput::Node(_) => None,
        }
    }

    #[test]
    fn test_escapable_characters() {
        assert_eq!(escaped(r"\*not emphasis*"), Some("*".to_string()));
        assert_eq!(escaped(r"\\"), Some("\\".to_string()));
        assert_eq!(escaped(r"\|"), Some("|".to_string()));
    }

    #[test]
    fn test_other_characters_are_not_escaped() {
        assert_eq!(escaped(r"\a"), None);
        assert_eq!(escaped(r"\<"), None);
        assert_eq!(escaped("\\"), None);
    }
}
