// src/specs/booklist.rs
//! Scraping *spec* for a translation's booklist page.
//!
//! Purpose:
//! - Parse the **remote HTML** of `/versions/<translation>/` and extract
//!   one `(book, chapter, rel_url)` tuple per chapter link.
//! - Ground truth is `table.chapterlinks tr td.chapters a`: the anchor's
//!   `title` attribute reads e.g. `"Song of Solomon 3"` (chapter is always
//!   the last token), its `href` is the site-relative passage URL.
//!
//! Non-Responsibilities (by design):
//! - **No networking** – the caller fetches; this spec reads a string.
//! - **No caching** – that lives in `chapters::load`.
//!
//! Extraction here is tolerant: an anchor with an unusable title or an
//! empty href is skipped. Only the passage spec is strict.

use crate::core::html::{self, CachedSelector};
use crate::core::sanitize::normalize_ws;

static CHAPTER_LINKS: CachedSelector =
    CachedSelector::new("table.chapterlinks tr td.chapters a");

/// One chapter's worth of discovery output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterLink {
    pub book: String,
    pub chapter: u32,
    pub rel_url: String,
}

/// All chapter links on a booklist page, in page order.
pub fn chapters(doc: &str) -> Vec<ChapterLink> {
    let dom = html::parse(doc);
    let mut out = Vec::new();

    for a in dom.select(CHAPTER_LINKS.get()) {
        let title = a.value().attr("title").unwrap_or("");
        let href = a.value().attr("href").unwrap_or("");
        if href.is_empty() {
            continue;
        }
        if let Some((book, chapter)) = split_title(title) {
            out.push(ChapterLink { book, chapter, rel_url: s!(href) });
        }
    }

    out
}

/// `"Song of Solomon 3"` → `("Song of Solomon", 3)`.
/// The chapter number is the last whitespace-separated token.
fn split_title(title: &str) -> Option<(String, u32)> {
    let title = normalize_ws(title);
    let (book, number) = title.rsplit_once(' ')?;
    let chapter = number.parse().ok()?;
    if book.is_empty() {
        return None;
    }
    Some((s!(book), chapter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_literal_compiles() {
        let _ = CHAPTER_LINKS.get();
    }

    #[test]
    fn splits_multiword_and_numbered_books() {
        assert_eq!(split_title("Genesis 1"), Some((s!("Genesis"), 1)));
        assert_eq!(
            split_title("Song of Solomon 3"),
            Some((s!("Song of Solomon"), 3))
        );
        assert_eq!(split_title("1 Kings 22"), Some((s!("1 Kings"), 22)));
        assert_eq!(split_title(" Jude  1 "), Some((s!("Jude"), 1)));
    }

    #[test]
    fn rejects_unusable_titles() {
        assert_eq!(split_title("Genesis"), None);
        assert_eq!(split_title(""), None);
        assert_eq!(split_title("Genesis one"), None);
    }
}
