// src/runner.rs
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use crate::{
    chapters,
    core::net,
    file,
    params::{DEFAULT_OUT_DIR, JITTER_MS, Params},
    progress::Progress,
    specs::{booklist::ChapterLink, passage},
    tsv,
    versions::{self, VersionMap},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub verses_written: usize,
    pub chapters_failed: usize,
}

/// Top-level runner: one TSV file per selected translation, chapters
/// strictly in sequence with a politeness pause between requests.
pub fn run(
    params: &Params,
    versions: &VersionMap,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let codes: Vec<String> = if params.all_versions {
        versions.codes().map(|c| s!(c)).collect()
    } else {
        vec![params.translation.clone()]
    };

    let mut summary = RunSummary {
        files_written: Vec::new(),
        verses_written: 0,
        chapters_failed: 0,
    };

    for code in &codes {
        let mut links = chapters::load(versions, code)?;
        if let Some(book) = &params.book {
            links.retain(|l| l.book.eq_ignore_ascii_case(book));
        }
        if links.is_empty() {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("No chapters to process for {code}."));
            }
            continue;
        }

        let out_path = resolve_out(params, code, codes.len() > 1)?;
        let mut out = BufWriter::new(File::create(&out_path)?);

        if let Some(p) = progress.as_deref_mut() {
            p.begin(links.len());
        }
        logf!("{code}: {} chapters -> {}", links.len(), out_path.display());

        for link in &links {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Grabbing verses for: {} {}", link.book, link.chapter));
            }

            match process_chapter(code, link, &mut out) {
                Ok(n) => {
                    summary.verses_written += n;
                    if let Some(p) = progress.as_deref_mut() {
                        p.chapter_done(&link.book, link.chapter);
                    }
                }
                Err(e) => {
                    // Abandon this chapter, keep going with the next one.
                    summary.chapters_failed += 1;
                    loge!("{} {} ({code}): {e}", link.book, link.chapter);
                    if let Some(p) = progress.as_deref_mut() {
                        p.chapter_failed(&link.book, link.chapter);
                    }
                }
            }

            let jitter = (link.chapter as u64) % JITTER_MS;
            thread::sleep(Duration::from_millis(params.pause_ms + jitter)); // be polite
        }

        out.flush()?;
        summary.files_written.push(out_path);
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
    }

    Ok(summary)
}

/// Fetch one chapter page, extract its verses and write them out.
/// Returns the number of records written.
fn process_chapter(
    code: &str,
    link: &ChapterLink,
    out: &mut impl Write,
) -> Result<usize, Box<dyn Error>> {
    let doc = net::http_get(&link.rel_url)?;

    // The record's version field comes from the page URL itself; the
    // requested code is only a fallback for odd hrefs.
    let version = versions::version_from_url(&link.rel_url).unwrap_or_else(|| {
        logd!("No version= in {}; using {code}", link.rel_url);
        s!(code)
    });

    let verses = passage::extract(&doc, &link.book, link.chapter, &version)?;

    let mut written = 0;
    for verse in verses {
        tsv::write_record(&mut *out, &verse)?;
        written += 1;
    }
    Ok(written)
}

fn resolve_out(params: &Params, code: &str, multi: bool) -> Result<PathBuf, Box<dyn Error>> {
    let filename = join!(code, ".tsv");
    if multi {
        // One file per translation: -o names a directory here.
        let dir = params
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
        file::ensure_directory(&dir)?;
        return Ok(dir.join(filename));
    }
    file::resolve_out_path(params.out.as_deref(), DEFAULT_OUT_DIR, &filename)
}
