// src/specs/passage.rs
//! Scraping *spec* for a chapter passage page
//! (`/passage/?search=<book>+<chapter>&version=<code>`).
//!
//! Verse text lives in `span.text` nodes under the passage column, either
//! directly inside paragraphs or inside a nested table (psalm layouts).
//! Each span's class attribute carries a `<book-abbrev>-<chapter>-<verse>`
//! tag. Footnote/cross-reference/verse-number superscripts and the large
//! chapter-number label are nested *inside* the spans and must not leak
//! into the extracted text.

use scraper::ElementRef;

use crate::core::html::{self, CachedSelector};
use crate::verse::{Fragment, MalformedDocument, Verses};

static VERSE_SPANS: CachedSelector = CachedSelector::new(
    "table.passage-cols td.passage-col div.passage-text p span.text, \
     table.passage-cols td.passage-col div.passage-text table span.text",
);

/// Extract one chapter's verses from its page.
///
/// `book` and `chapter` are passed through to the emitted records verbatim;
/// `version` is the translation code the caller resolved from the page URL.
/// A page with no verse spans yields an empty iterator, not an error.
pub fn extract(
    doc: &str,
    book: &str,
    chapter: u32,
    version: &str,
) -> Result<Verses, MalformedDocument> {
    let dom = html::parse(doc);

    // Tag validation is eager so a malformed fragment rejects the chapter
    // before anything is emitted; grouping stays lazy.
    let mut frags = Vec::new();
    for span in dom.select(VERSE_SPANS.get()) {
        let tag = span.value().attr("class").unwrap_or("");
        let text = html::text_excluding(span, &is_annotation);
        frags.push(Fragment::from_node(tag, text)?);
    }

    Ok(Verses::new(version, book, chapter, frags))
}

/// Annotation markup nested inside verse spans: `sup` (footnotes,
/// cross-references, verse numbers) and the `span.chapternum` label.
fn is_annotation(el: ElementRef<'_>) -> bool {
    match el.value().name() {
        "sup" => true,
        "span" => html::has_class(el, "chapternum"),
        _ => false,
    }
}
