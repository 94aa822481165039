//! Read-only DOM view over a parsed HTML page.
//!
//! Everything above this module talks to [`Document`] and [`Node`] instead of
//! the `scraper` types so selector handling and text extraction behave the
//! same for structured-data and per-host extraction.

use std::io::Read;

use log::debug;
use scraper::node::Node as RawNode;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p",
    "pre", "section", "table", "tbody", "td", "th", "thead", "tr", "ul",
];

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

/// One element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Parse a page from a byte stream.
    ///
    /// The HTML parser recovers from almost anything, so the only failures are
    /// an unreadable stream or a body that holds no markup at all.
    pub fn parse<R: Read>(mut reader: R) -> Result<Self, ScrapeError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ScrapeError::Parse(e.to_string()))?;
        Self::parse_str(&String::from_utf8_lossy(&bytes))
    }

    pub fn parse_str(html: &str) -> Result<Self, ScrapeError> {
        if html.trim().is_empty() {
            return Err(ScrapeError::Parse("document is empty".to_string()));
        }
        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn select(&self, css: &str) -> Vec<Node<'_>> {
        self.root().select(css)
    }

    pub fn select_first(&self, css: &str) -> Option<Node<'_>> {
        self.root().select_first(css)
    }
}

impl<'a> Node<'a> {
    pub fn select(&self, css: &str) -> Vec<Node<'a>> {
        match compile(css) {
            Some(selector) => self
                .element
                .select(&selector)
                .map(|element| Node { element })
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn select_first(&self, css: &str) -> Option<Node<'a>> {
        let selector = compile(css)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| Node { element })
    }

    /// Descendant text with whitespace runs collapsed and the ends trimmed.
    pub fn text(&self) -> String {
        collapse(&self.element.text().collect::<String>())
    }

    /// Descendant text exactly as parsed, without whitespace cleanup.
    pub fn raw_text(&self) -> String {
        self.element.text().collect()
    }

    /// Attribute value, or an empty string if absent.
    pub fn attr(&self, name: &str) -> String {
        self.element.value().attr(name).unwrap_or_default().to_string()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.element.value().attr(name).is_some()
    }

    pub fn tag(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Direct element children.
    pub fn children(&self) -> Vec<Node<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(|element| Node { element })
            .collect()
    }

    /// Text split at `<br>` and block-element boundaries, one entry per
    /// non-empty line.
    pub fn lines(&self) -> Vec<String> {
        let mut out = String::new();
        push_lines(self.element, &mut out);
        out.lines()
            .map(collapse)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

fn push_lines(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            RawNode::Text(text) => out.push_str(text),
            RawNode::Element(el) => {
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if matches!(name, "script" | "style" | "template") {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                push_lines(child_el, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug!("Invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
