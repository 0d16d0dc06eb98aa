// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::chapters;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;
use crate::versions::VersionMap;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let versions = VersionMap::builtin();

    if params.list_chapters {
        for link in chapters::load(&versions, &params.translation)? {
            println!("{}\t{}\t{}", link.book, link.chapter, link.rel_url);
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, &versions, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if summary.chapters_failed > 0 {
        eprintln!("{} chapter(s) failed; see .store/scrape.log", summary.chapters_failed);
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-v" | "--translation" => {
                let v = args.next().ok_or("Missing translation code")?;
                params.translation = v.to_ascii_uppercase();
                params.all_versions = false; // later flag wins over -a
            }
            "-a" | "--all-versions" => params.all_versions = true,
            "--book" => {
                let v = args.next().ok_or("Missing value for --book")?;
                params.book = Some(v);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?))
            }
            "--list-chapters" => params.list_chapters = true,
            "--pause" => {
                let v = args.next().ok_or("Missing value for --pause")?;
                params.pause_ms = v.parse()?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/// Progress sink printing to the terminal.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.failed = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn chapter_failed(&mut self, book: &str, chapter: u32) {
        self.failed += 1;
        eprintln!("Failed: {} {}", book, chapter);
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            eprintln!("{}/{} chapters failed", self.failed, self.total);
        }
    }
}
