// src/versions.rs
//
// Translation → booklist-path mapping. Built once by the caller and passed
// down explicitly; nothing in the crate reaches for a global table.

/// Known translations and the site-relative paths of their booklist pages.
#[derive(Clone, Debug)]
pub struct VersionMap {
    entries: Vec<(String, String)>,
}

impl VersionMap {
    /// The five editions the scraper has always shipped with.
    pub fn builtin() -> Self {
        let entries = [
            ("ESV", "/versions/English-Standard-Version-ESV-Bible/"),
            ("NIV", "/versions/New-International-Version-NIV-Bible/"),
            ("KJV", "/versions/King-James-Version-KJV-Bible/"),
            ("NLT", "/versions/New-Living-Translation-NLT-Bible/"),
            ("HCSB", "/versions/Holman-Christian-Standard-Bible-HCSB/"),
        ];
        Self::with_entries(
            entries
                .into_iter()
                .map(|(code, path)| (s!(code), s!(path)))
                .collect(),
        )
    }

    pub fn with_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Booklist path for a translation code, if known.
    pub fn booklist_path(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, path)| path.as_str())
    }

    /// Translation codes in map order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }
}

/// Resolve the `version=` query parameter of a chapter URL.
/// The emitted records carry what the URL says, not what was asked for.
pub fn version_from_url(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "version" && !value.is_empty()).then(|| s!(value))
    })
}
