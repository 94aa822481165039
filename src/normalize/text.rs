use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|li|div|h[1-6])\s*>").expect("Invalid line break regex")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

const MAX_DECODE_PASSES: usize = 8;

/// Decode HTML entities until the text stops changing, so multiply escaped
/// sources (`&amp;amp;`) come out clean in one call.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for _ in 0..MAX_DECODE_PASSES {
        let next = decode_html_entities(&decoded);
        if next == decoded {
            break;
        }
        decoded = next.into_owned();
    }
    decoded
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, " ").into_owned()
}

/// Plain text field: entities decoded, whitespace collapsed.
pub fn clean_text(text: &str) -> String {
    collapse_whitespace(&decode_entities(text))
}

/// Like [`clean_text`] but keeps inline markup as published.
pub fn clean_description(text: &str) -> String {
    clean_text(text)
}

/// One ingredient or instruction line: entities decoded, markup removed,
/// whitespace collapsed.
pub fn clean_line(text: &str) -> String {
    collapse_whitespace(&strip_tags(&decode_entities(text)))
}

/// Split a block of text into lines.
///
/// `<br>` (and closing paragraph-like tags) win over newlines: when the block
/// contains any, newlines inside a segment are treated as plain whitespace.
pub fn split_lines(text: &str) -> Vec<String> {
    let decoded = decode_entities(text);
    let segments: Vec<&str> = if LINE_BREAK_REGEX.is_match(&decoded) {
        LINE_BREAK_REGEX.split(&decoded).collect()
    } else {
        decoded.lines().collect()
    };

    segments
        .into_iter()
        .map(|segment| collapse_whitespace(&strip_tags(segment)))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Remove leading cruft such as "Print" or "Jump to Recipe" labels.
pub fn strip_prefixes(text: &str, prefixes: &[&str]) -> String {
    let mut out = text.trim();
    for prefix in prefixes {
        if out.len() >= prefix.len()
            && out.is_char_boundary(prefix.len())
            && out[..prefix.len()].eq_ignore_ascii_case(prefix)
            && !out[prefix.len()..].starts_with(char::is_alphanumeric)
        {
            out = out[prefix.len()..].trim_start_matches([':', ' ', '-']);
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_decodes_entities() {
        assert_eq!(clean_text("Mac &amp; Cheese&hellip;"), "Mac & Cheese…");
        assert_eq!(clean_text("Caf&#233;  au\n lait"), "Café au lait");
        assert_eq!(clean_text("Fish &amp;amp; Chips"), "Fish & Chips");
        assert_eq!(clean_text("Fish &amp;amp;amp;amp; Chips"), "Fish & Chips");
    }

    #[test]
    fn test_description_keeps_markup() {
        assert_eq!(
            clean_description("A <em>very</em> good &amp; easy cake"),
            "A <em>very</em> good & easy cake"
        );
    }

    #[test]
    fn test_split_lines_prefers_br() {
        assert_eq!(
            split_lines("Preheat the oven.<br>Mix the batter\nwell.<br />Bake."),
            vec!["Preheat the oven.", "Mix the batter well.", "Bake."]
        );
    }

    #[test]
    fn test_split_lines_on_newlines() {
        assert_eq!(
            split_lines("1 cup flour\n\n  2 eggs \r\n1 tsp salt"),
            vec!["1 cup flour", "2 eggs", "1 tsp salt"]
        );
    }

    #[test]
    fn test_split_lines_on_escaped_paragraphs() {
        assert_eq!(
            split_lines("&lt;p&gt;Chop.&lt;/p&gt;&lt;p&gt;Fry.&lt;/p&gt;"),
            vec!["Chop.", "Fry."]
        );
    }

    #[test]
    fn test_clean_line_strips_tags() {
        assert_eq!(clean_line("<strong>2</strong> cups &nbsp;milk"), "2 cups milk");
    }

    #[test]
    fn test_strip_prefixes() {
        assert_eq!(
            strip_prefixes("Jump to Recipe: Lemon Bars", &["Jump to Recipe"]),
            "Lemon Bars"
        );
        assert_eq!(strip_prefixes("Print Lemon Bars", &["Print"]), "Lemon Bars");
        assert_eq!(strip_prefixes("Lemon Bars", &["Print"]), "Lemon Bars");
    }
}
