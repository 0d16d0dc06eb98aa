// src/verse.rs
//
// Verse grouping core. A chapter page carries its text as a flat, ordered
// run of `span.text` fragments; one logical verse is often split across
// several of them (poetry lines, paragraph breaks). Fragments carrying the
// same verse number back-to-back are merged into a single record here.
//
// This module is markup-agnostic on purpose: it only ever sees the plain
// `Fragment` data that `specs::passage` pulled out of the page.

use std::error::Error;
use std::fmt;
use std::vec::IntoIter;

/// One verse-text node's worth of content, with the chapter and verse
/// numbers that were encoded in its class attribute (e.g. `Gen-2-4`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Fragment {
    /// Build a fragment from a node's class attribute and text content.
    /// The attribute must contain a `<letters>-<chapter>-<verse>` token;
    /// anything else rejects the whole document, since grouping is
    /// order-dependent and a skipped fragment could merge the wrong verses.
    pub fn from_node(tag: &str, text: String) -> Result<Self, MalformedDocument> {
        match parse_passage_tag(tag) {
            Some((chapter, verse)) => Ok(Self { chapter, verse, text }),
            None => Err(MalformedDocument { tag: s!(tag) }),
        }
    }
}

/// Scan a class attribute string for a `letters-digits-digits` run and
/// return the two digit groups as (chapter, verse).
///
/// The class value usually looks like `"text Gen-2-4"`; book abbreviations
/// never contain digits, so the first digit group is always the chapter.
pub fn parse_passage_tag(tag: &str) -> Option<(u32, u32)> {
    let bytes = tag.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_alphabetic() {
            i += 1;
            continue;
        }
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
            j += 1;
        }
        if let Some(pair) = dash_digit_pair(&tag[j..]) {
            return Some(pair);
        }
        i = j;
    }
    None
}

/// Parse a leading `-<digits>-<digits>` off `s`.
fn dash_digit_pair(s: &str) -> Option<(u32, u32)> {
    let (first, rest) = leading_number(s.strip_prefix('-')?)?;
    let (second, _) = leading_number(rest.strip_prefix('-')?)?;
    Some((first, second))
}

/// Parse the leading digit run of `s`; returns the value and the remainder.
fn leading_number(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((s[..end].parse().ok()?, &s[end..]))
}

/// A verse-text fragment whose class attribute does not carry the expected
/// chapter-verse tag. Aborts the whole chapter: no records are emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedDocument {
    /// The offending fragment's raw class attribute.
    pub tag: String,
}

impl fmt::Display for MalformedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verse fragment with unrecognized tag: {:?}", self.tag)
    }
}

impl Error for MalformedDocument {}

/// One finished verse, ready to be written out.
///
/// `chapter` is the caller's chapter number, not the one encoded in the
/// fragment tags; the two agree on well-formed pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verse {
    pub version: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Iterator over finished verses for one chapter.
///
/// Finite and forward-only: each fragment is consumed exactly once, and
/// re-extracting a chapter means building a fresh `Verses` from a fresh
/// document. One record is produced per maximal run of consecutive
/// fragments sharing a verse number; a verse number that reappears later,
/// non-consecutively, starts a new record.
#[derive(Debug)]
pub struct Verses {
    frags: IntoIter<Fragment>,
    pending: Option<(u32, String)>,
    version: String,
    book: String,
    chapter: u32,
}

impl Verses {
    pub fn new(version: &str, book: &str, chapter: u32, frags: Vec<Fragment>) -> Self {
        Self {
            frags: frags.into_iter(),
            pending: None,
            version: s!(version),
            book: s!(book),
            chapter,
        }
    }

    fn finished(&self, verse: u32, text: String) -> Verse {
        Verse {
            version: self.version.clone(),
            book: self.book.clone(),
            chapter: self.chapter,
            verse,
            text,
        }
    }
}

impl Iterator for Verses {
    type Item = Verse;

    fn next(&mut self) -> Option<Verse> {
        for frag in self.frags.by_ref() {
            let text = frag.text.trim();
            match &mut self.pending {
                // Same verse number: this fragment continues the open group.
                Some((verse, acc)) if *verse == frag.verse => {
                    acc.push(' ');
                    acc.push_str(text);
                }
                // New verse number: hand back the open group, if any.
                pending => {
                    let done = pending.replace((frag.verse, s!(text)));
                    if let Some((verse, acc)) = done {
                        return Some(self.finished(verse, acc));
                    }
                }
            }
        }
        // Input exhausted: flush the trailing group. Skipping this step
        // would drop the last verse of every chapter.
        let (verse, acc) = self.pending.take()?;
        Some(self.finished(verse, acc))
    }
}
