//! Whole-pipeline properties of the converter.

use fastdown::{Config, ConfigBuilder, Dialect, Engine, parse};

fn unsafe_config() -> Config {
    ConfigBuilder::default().safe_mode(false).build()
}

fn extended_unsafe() -> Config {
    ConfigBuilder::default()
        .dialect(Dialect::Extended)
        .safe_mode(false)
        .build()
}

#[test]
fn rendering_is_deterministic() {
    let inputs = [
        "# a\n\n- b\n- c\n\n> d",
        "x[^1] [y][r]\n\n[r]: /r\n[^1]: note",
        "a | b\n--|--\n1 | 2",
    ];
    for config in [Config::default(), extended_unsafe()] {
        for input in inputs {
            assert_eq!(
                parse(input, Some(config.clone())),
                parse(input, Some(config.clone()))
            );
        }
    }
}

#[test]
fn forward_reference_resolves() {
    let html = parse("[a][1]\n\n[1]: http://x", None);
    assert_eq!(html, r#"<p><a href="http://x">a</a></p>"#);
}

#[test]
fn atx_heading_levels() {
    for level in 1..=4 {
        let input = format!("{} hello world", "#".repeat(level));
        assert_eq!(
            parse(&input, None),
            format!("<h{level}>hello world</h{level}>")
        );
    }
}

#[test]
fn paragraph_keeps_trailing_space_after_emphasis() {
    assert_eq!(parse(" *hello world* ", None), "<p><i>hello world</i> </p>");
}

#[test]
fn underscore_before_letter_is_not_emphasis() {
    assert_eq!(parse("_a_é and _b_", None), "<p>_a_é and <i>b</i></p>");
}

#[test]
fn safe_mode_neutralizes_script_urls() {
    let html = parse("[x](javascript:alert(1))", None);
    assert!(!html.contains("javascript:"), "got {html}");
    assert!(html.contains("javascript%3A"), "got {html}");

    let html = parse(r#"<a href="javascript:alert(1)">x</a>"#, None);
    assert!(!html.contains(r#"href="javascript:"#), "got {html}");
}

#[test]
fn footnotes_are_numbered_by_first_use() {
    let html = parse(
        "x[^b] y[^a]\n\n[^a]: A\n\n[^b]: B",
        Some(extended_unsafe()),
    );
    assert!(html.contains(
        r##"<sup id="fnref1:b"><a href="#fn:b" class="footnote-ref">1</a></sup>"##
    ));
    assert!(html.contains(
        r##"<sup id="fnref1:a"><a href="#fn:a" class="footnote-ref">2</a></sup>"##
    ));
    let b = html.find(r#"<li id="fn:b">"#).expect("footnote b listed");
    let a = html.find(r#"<li id="fn:a">"#).expect("footnote a listed");
    assert!(b < a);
}

#[test]
fn table_alignment_styles() {
    let html = parse("A|B\n:--|--:\n1|2", None);
    assert!(html.contains(r#"<th style="text-align: left;">A</th>"#));
    assert!(html.contains(r#"<th style="text-align: right;">B</th>"#));
    assert!(html.contains(r#"<td style="text-align: left;">1</td>"#));
    assert!(html.contains(r#"<td style="text-align: right;">2</td>"#));
}

#[test]
fn unterminated_fence_keeps_remaining_lines() {
    assert_eq!(
        parse("```\nline one\n\n# not a heading", None),
        "<pre><code>line one\n\n# not a heading</code></pre>"
    );
}

#[test]
fn malformed_input_always_renders() {
    let inputs = [
        "", "\t", "\n\n\n", "*", "**", "_", "[", "[^", "[]", "![", "`", "```", "~~", "<", "<!--",
        "<div>", "<div markdown=\"1\">", ">", "> ", "- ", "1.", "#", "|", "|\n-", ":", "http://",
        "\\", "&", "*[", "é*ü*", "a  \n", "[a]: ",
    ];
    for config in [Config::default(), unsafe_config(), extended_unsafe()] {
        for input in inputs {
            let _ = parse(input, Some(config.clone()));
        }
    }
}

#[test]
fn engine_is_reusable() {
    let engine = Engine::new(extended_unsafe());
    let first = engine.parse("a[^n]\n\n[^n]: one");
    let second = engine.parse("b[^m]\n\n[^m]: two");
    assert!(first.contains(r#"<li id="fn:n">"#));
    assert!(!second.contains("fn:n"));
    assert!(second.contains(r#"<li id="fn:m">"#));
}

#[test]
fn options_change_output() {
    let input = "a\nb http://x.org";
    assert_eq!(
        parse(input, None),
        r#"<p>a<br />
b <a href="http://x.org">http://x.org</a></p>"#
    );

    let config = ConfigBuilder::default()
        .breaks_enabled(false)
        .urls_linked(false)
        .build();
    assert_eq!(parse(input, Some(config)), "<p>a\nb http://x.org</p>");
}

#[test]
fn deep_quote_nesting_is_bounded() {
    let html = parse(&format!("{} a", ">".repeat(10_000)), None);
    let opened = html.matches("<blockquote>").count();
    assert!(opened > 1 && opened <= 128, "{opened} quotes");
    assert_eq!(opened, html.matches("</blockquote>").count());
}

#[test]
fn deep_list_nesting_is_bounded() {
    let html = parse(&format!("{}a", "- ".repeat(10_000)), None);
    let opened = html.matches("<ul>").count();
    assert!(opened > 1 && opened <= 128, "{opened} lists");
}

#[test]
fn deep_markdown_html_nesting_terminates() {
    let depth = 10_000;
    let input = format!(
        "{}*x*{}",
        "<div markdown=\"1\">".repeat(depth),
        "</div>".repeat(depth)
    );
    let html = parse(&input, Some(extended_unsafe()));
    assert!(html.starts_with("<div>"));
}

#[test]
fn long_marker_runs_terminate() {
    for marker in ["*", "_", "[", "`", "<", "~"] {
        let input = format!("a{}", marker.repeat(100_000));
        for config in [Config::default(), extended_unsafe()] {
            let html = parse(&input, Some(config));
            assert!(html.starts_with("<p>a"), "marker {marker}");
        }
    }
}

#[test]
fn deeply_nested_emphasis_falls_back_to_text() {
    let input = format!("{}x{}", "**".repeat(5_000), "**".repeat(5_000));
    let html = parse(&input, None);
    assert!(html.contains("<strong>"));
    assert!(html.contains('x'));
}
