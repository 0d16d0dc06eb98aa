// src/params.rs
use std::env;
use std::path::PathBuf;

// Net config
pub const HOST: &str = "www.biblegateway.com";
pub const USER_AGENT: &str = "bg_scrape/0.3";

// Local cache + log location
pub const STORE_DIR: &str = ".store";

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TRANSLATION: &str = "NIV";

// One request at a time, and not back-to-back either
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

#[derive(Clone, Debug)]
pub struct Params {
    pub translation: String,         // single translation code, e.g. "ESV"
    pub all_versions: bool,          // scrape every built-in translation
    pub book: Option<String>,        // restrict to one book by name
    pub out: Option<PathBuf>,        // output path (file, or dir for --all-versions)
    pub list_chapters: bool,         // print the chapter list then exit
    pub pause_ms: u64,               // pause between chapter requests
}

impl Params {
    pub fn new() -> Self {
        Self {
            // -v/--translation overrides; the env var wins over the default
            translation: env::var("TRANSLATION")
                .unwrap_or_else(|_| s!(DEFAULT_TRANSLATION)),
            all_versions: false,
            book: None,
            out: None,
            list_chapters: false,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
