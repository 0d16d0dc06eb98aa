// src/chapters.rs

use std::{error::Error, fs, path::PathBuf};

use crate::core::net;
use crate::params::STORE_DIR;
use crate::specs::booklist::{self, ChapterLink};
use crate::versions::VersionMap;

fn cache_path(code: &str) -> PathBuf {
    PathBuf::from(STORE_DIR).join(join!("chapters_", code, ".tsv"))
}

/// Load a translation's chapter list either from cache or the website.
/// Returns (book, chapter, rel_url) links in booklist order.
pub fn load(versions: &VersionMap, code: &str) -> Result<Vec<ChapterLink>, Box<dyn Error>> {
    let path = cache_path(code);
    if path.exists() {
        if let Ok(text) = fs::read_to_string(&path) {
            if let Ok(list) = parse_cache(&text) {
                return Ok(list);
            }
        }
    }

    // fallback to live fetch
    let list = fetch(versions, code)?;

    // write cache, best-effort
    let mut buf = s!();
    for link in &list {
        buf.push_str(&format!("{}\t{}\t{}\n", link.book, link.chapter, link.rel_url));
    }
    if fs::create_dir_all(STORE_DIR).is_ok() {
        let _ = fs::write(&path, buf);
    }

    Ok(list)
}

/// Parse a cached chapters file back into links.
fn parse_cache(text: &str) -> Result<Vec<ChapterLink>, Box<dyn Error>> {
    let mut out = Vec::new();
    for line in text.lines() {
        let mut parts = line.splitn(3, '\t');
        let book = parts.next().ok_or("Malformed cache line")?;
        let chapter: u32 = parts.next().ok_or("Malformed cache line")?.parse()?;
        let rel_url = parts.next().ok_or("Malformed cache line")?;
        if book.is_empty() || rel_url.is_empty() {
            return Err("Malformed cache line".into());
        }
        out.push(ChapterLink {
            book: s!(book),
            chapter,
            rel_url: s!(rel_url),
        });
    }
    Ok(out)
}

/// Fetch directly from the website (HTTPS GET + booklist spec).
fn fetch(versions: &VersionMap, code: &str) -> Result<Vec<ChapterLink>, Box<dyn Error>> {
    let path = versions
        .booklist_path(code)
        .ok_or_else(|| format!("Unknown translation: {}", code))?;
    let doc = net::http_get(path)?;
    let list = booklist::chapters(&doc);
    if list.is_empty() {
        loge!("Booklist for {code} yielded no chapter links");
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_roundtrip_shape() {
        let text = "Genesis\t1\t/passage/?search=Genesis+1&version=ESV\n\
                    Song of Solomon\t3\t/passage/?search=Song+of+Solomon+3&version=ESV\n";
        let links = parse_cache(text).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].book, "Song of Solomon");
        assert_eq!(links[1].chapter, 3);
    }

    #[test]
    fn truncated_cache_line_is_an_error() {
        assert!(parse_cache("Genesis\t1\n").is_err());
        assert!(parse_cache("Genesis\tone\t/x\n").is_err());
    }
}
