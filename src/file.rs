// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

/// Ensure parent dir exists and resolve where one translation's TSV goes.
/// `user_o = None` → `<default_dir>/<default_filename>`.
/// A directory (existing or `/`-suffixed) → `<dir>/<default_filename>`.
/// Anything else is taken as the file path itself.
pub fn resolve_out_path(
    user_o: Option<&Path>,
    default_dir: &str,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = match user_o {
        None => {
            let dir = PathBuf::from(default_dir);
            ensure_directory(&dir)?;
            dir.join(default_filename)
        }
        Some(p) if p.is_dir() || looks_like_dir_hint(p) => {
            ensure_directory(p)?;
            p.join(default_filename)
        }
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            p.to_path_buf()
        }
    };
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
