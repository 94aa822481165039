//! Selector helpers shared by the per-host extractors.
//!
//! These return text as it appears on the page. Cleanup into the record's
//! representation happens in [`crate::normalize`] after extraction.

use crate::dom::{Document, Node};
use crate::normalize;

/// Labels sites put next to the real content.
const CRUFT: &[&str] = &[
    "Print",
    "Print Recipe",
    "Jump to Recipe",
    "Pin",
    "Pin Recipe",
    "Save Recipe",
    "Rate this Recipe",
    "Cook Mode",
];

/// `content` of a `<meta>` tag matched by `property` or `name`.
pub fn meta(doc: &Document, key: &str) -> String {
    let selector = format!(r#"meta[property="{key}"], meta[name="{key}"]"#);
    doc.select(&selector)
        .iter()
        .map(|node| node.attr("content"))
        .find(|content| !content.trim().is_empty())
        .unwrap_or_default()
}

/// Open Graph image, the usual fallback for a hero image.
pub fn og_image(doc: &Document) -> String {
    meta(doc, "og:image")
}

/// Text of the first non-empty match.
pub fn text(doc: &Document, css: &str) -> String {
    first_text(&doc.select(css))
}

/// Text of every non-empty match, in document order.
pub fn texts(doc: &Document, css: &str) -> Vec<String> {
    all_texts(&doc.select(css))
}

pub fn node_text(node: &Node<'_>, css: &str) -> String {
    first_text(&node.select(css))
}

pub fn node_texts(node: &Node<'_>, css: &str) -> Vec<String> {
    all_texts(&node.select(css))
}

/// Attribute of the first match that has it set.
pub fn attr(doc: &Document, css: &str, name: &str) -> String {
    doc.select(css)
        .iter()
        .map(|node| node.attr(name))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
}

/// Image source of the first match, preferring lazy-load attributes.
pub fn image_src(doc: &Document, css: &str) -> String {
    doc.select(css)
        .iter()
        .flat_map(|img| ["data-lazy-src", "data-src", "src"].map(|name| img.attr(name)))
        .find(|src| !src.trim().is_empty() && !src.starts_with("data:"))
        .unwrap_or_default()
}

/// `<br>`/block-separated lines of the first match.
pub fn lines(doc: &Document, css: &str) -> Vec<String> {
    doc.select_first(css)
        .map(|node| strip_cruft(node.lines()))
        .unwrap_or_default()
}

/// Text following a label such as "Prep Time:" in a `label value` pair.
///
/// Searches every match of `css` for one starting with one of `labels` and
/// returns the rest of its text.
pub fn labelled(doc: &Document, css: &str, labels: &[&str]) -> String {
    doc.select(css)
        .iter()
        .map(|node| node.lines().join(" "))
        .find_map(|text| {
            let rest = normalize::strip_prefixes(&text, labels);
            (rest.len() < text.len()).then_some(rest)
        })
        .unwrap_or_default()
}

/// Drop cruft labels and empty entries from extracted lines.
pub fn strip_cruft(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .filter(|line| !CRUFT.iter().any(|cruft| line.eq_ignore_ascii_case(cruft)))
        .collect()
}

/// Join the text of each matched row's parts (amount, unit, name) with spaces.
pub fn joined_rows(doc: &Document, row_css: &str, part_css: &str) -> Vec<String> {
    doc.select(row_css)
        .iter()
        .map(|row| node_texts(row, part_css).join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Items listed under a heading, for pages without dedicated recipe markup.
///
/// Walks the children of the first `container` match. Once a heading
/// (`h2`-`h4`, or a MediaWiki heading wrapper) starting with one of
/// `headings` is seen, the `<li>` entries of following lists (or the text of
/// plain paragraphs) are collected until the next heading.
pub fn section_items(doc: &Document, container: &str, headings: &[&str]) -> Vec<String> {
    let Some(root) = doc.select_first(container) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut inside = false;
    for child in root.children() {
        let tag = child.tag();
        let heading = matches!(tag, "h2" | "h3" | "h4")
            || child.attr("class").split_whitespace().any(|c| c == "mw-heading");
        if heading {
            let title = child.text().to_lowercase();
            inside = headings
                .iter()
                .any(|heading| title.starts_with(&heading.to_lowercase()));
            continue;
        }
        if !inside {
            continue;
        }
        match tag {
            "ul" | "ol" => items.extend(node_texts(&child, "li")),
            "p" => items.extend(child.lines()),
            _ => {}
        }
    }
    strip_cruft(items)
}

fn first_text(nodes: &[Node<'_>]) -> String {
    nodes
        .iter()
        .map(|node| node.text())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn all_texts(nodes: &[Node<'_>]) -> Vec<String> {
    strip_cruft(nodes.iter().map(|node| node.text()).collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <meta property="og:image" content="https://cdn.example.com/hero.jpg">
        <meta name="description" content="A hearty stew">
        </head><body>
        <ul class="meta">
            <li>Prep Time: 15 mins</li>
            <li>Cook Time: 1 hr</li>
        </ul>
        <ul class="ing">
            <li><span class="qty">2</span> <span class="name">carrots</span></li>
            <li><span class="qty">1 lb</span> <span class="name">beef</span></li>
        </ul>
        <div class="steps"><p>Print</p><p>Brown the beef.</p><p>Simmer.</p></div>
        </body></html>"#;

    #[test]
    fn test_meta_and_labels() {
        let doc = Document::parse_str(PAGE).unwrap();
        assert_eq!(og_image(&doc), "https://cdn.example.com/hero.jpg");
        assert_eq!(meta(&doc, "description"), "A hearty stew");
        assert_eq!(labelled(&doc, ".meta li", &["Cook Time"]), "1 hr");
        assert_eq!(labelled(&doc, ".meta li", &["Total Time"]), "");
    }

    #[test]
    fn test_rows_and_lines() {
        let doc = Document::parse_str(PAGE).unwrap();
        assert_eq!(
            joined_rows(&doc, ".ing li", "span"),
            vec!["2 carrots", "1 lb beef"]
        );
        assert_eq!(lines(&doc, ".steps"), vec!["Brown the beef.", "Simmer."]);
    }
}
