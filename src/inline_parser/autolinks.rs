//! Automatic links: bare `http(s)://` URLs, `<scheme://...>` and
//! `<user@host>`.

use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;
use crate::node::{Content, RenderNode};

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhttps?://[^\s<]+\b/*").unwrap());
static URL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<(\w+://[^ >]+)>").unwrap());
static EMAIL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<((mailto:)?[^\s<>@]+@[^\s<>]+?)>").unwrap());

fn link(text: &str, href: String) -> RenderNode {
    RenderNode::element("a", Content::Text(text.to_string())).with_attribute("href", Some(href))
}

/// Bare URL, dispatched on the `:` of its scheme. The match is searched in
/// the whole remaining text and may start before the marker.
pub fn try_parse_url(excerpt: &str, context: &str) -> Option<InlineMatch> {
    if excerpt.as_bytes().get(2) != Some(&b'/') {
        return None;
    }

    let url = BARE_URL.find(context)?;
    Some(InlineMatch {
        position: Some(url.start()),
        ..InlineMatch::node(url.len(), link(url.as_str(), url.as_str().to_string()))
    })
}

pub fn try_parse_url_tag(text: &str) -> Option<InlineMatch> {
    let caps = URL_TAG.captures(text)?;
    let url = caps.get(1)?.as_str();
    Some(InlineMatch::node(caps.get(0)?.len(), link(url, url.to_string())))
}

/// An address without a scheme gains `mailto:` in the link target.
pub fn try_parse_email_tag(text: &str) -> Option<InlineMatch> {
    let caps = EMAIL_TAG.captures(text)?;
    let address = caps.get(1)?.as_str();
    let href = if caps.get(2).is_some() {
        address.to_string()
    } else {
        format!("mailto:{}", address)
    };
    Some(InlineMatch::node(caps.get(0)?.len(), link(address, href)))
}
