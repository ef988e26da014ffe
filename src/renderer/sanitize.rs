//! Safe-mode attribute filtering.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Attributes;

static SAFE_ATTRIBUTE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").unwrap());

const SAFE_URL_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "ftps://",
    "mailto:",
    "data:image/png;base64,",
    "data:image/gif;base64,",
    "data:image/jpeg;base64,",
    "irc:",
    "ircs:",
    "git:",
    "ssh:",
    "news:",
    "steam:",
];

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn is_safe_url(url: &str) -> bool {
    SAFE_URL_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(url, prefix))
}

/// Neutralize the URL attribute of links and images, then drop malformed
/// attribute names and event handlers.
pub(super) fn sanitize_attributes(element: &str, attributes: &mut Attributes) {
    let url_attribute = match element {
        "a" => Some("href"),
        "img" => Some("src"),
        _ => None,
    };

    if let Some(url_attribute) = url_attribute {
        for (key, value) in attributes.iter_mut() {
            if key.as_str() == url_attribute
                && let Some(url) = value
                && !is_safe_url(url)
            {
                log::debug!("Unsafe {} neutralized: {}", key, url);
                *url = url.replace(':', "%3A");
            }
        }
    }

    attributes.retain(|(key, _)| {
        SAFE_ATTRIBUTE_NAME.is_match(key) && !starts_with_ignore_case(key, "on")
    });
}
