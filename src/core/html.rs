// src/core/html.rs

// Thin helpers over the `scraper` DOM. Everything selector- or node-shaped
// stays behind this module and `specs::*`; the rest of the crate only sees
// plain strings and structs.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

/// Parse a full document. Parsing never fails; broken markup just yields
/// a best-effort tree, which is all a scraper can ask for.
pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// A CSS selector compiled on first use.
///
/// Selector strings in this crate are literals, so a parse failure is a
/// programming error, not input data; every literal is covered by a test
/// that forces compilation.
pub struct CachedSelector {
    css: &'static str,
    cell: OnceLock<Selector>,
}

impl CachedSelector {
    pub const fn new(css: &'static str) -> Self {
        Self { css, cell: OnceLock::new() }
    }

    pub fn get(&self) -> &Selector {
        self.cell
            .get_or_init(|| Selector::parse(self.css).expect(self.css))
    }
}

/// Concatenated text of `el`, skipping every descendant subtree for which
/// `skip` is true. This is the "filtered view" used to drop footnote
/// superscripts and chapter-number labels without mutating the tree.
pub fn text_excluding<F>(el: ElementRef<'_>, skip: &F) -> String
where
    F: Fn(ElementRef<'_>) -> bool,
{
    let mut out = s!();
    collect_text(el, skip, &mut out);
    out
}

fn collect_text<F>(el: ElementRef<'_>, skip: &F, out: &mut String)
where
    F: Fn(ElementRef<'_>) -> bool,
{
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !skip(child_el) {
                collect_text(child_el, skip, out);
            }
        }
    }
}

/// True if the element's class attribute contains `class` as a whole token.
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .unwrap_or("")
        .split_ascii_whitespace()
        .any(|c| c == class)
}
