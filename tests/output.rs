// tests/output.rs
//
// Output-path resolution and end-to-end record writing without a network.
//
use std::fs;
use std::path::PathBuf;

use bg_scrape::file::resolve_out_path;
use bg_scrape::tsv;
use bg_scrape::verse::{Fragment, Verses};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("bg_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn default_out_is_dir_plus_code_filename() {
    let dir = tmp_dir("default_out");
    let resolved = resolve_out_path(None, dir.to_str().unwrap(), "ESV.tsv").unwrap();
    assert_eq!(resolved, dir.join("ESV.tsv"));
    assert!(dir.is_dir());
}

#[test]
fn explicit_dir_gets_default_filename() {
    let dir = tmp_dir("explicit_dir");
    let resolved = resolve_out_path(Some(dir.as_path()), "unused", "KJV.tsv").unwrap();
    assert_eq!(resolved, dir.join("KJV.tsv"));
}

#[test]
fn explicit_file_is_used_verbatim() {
    let dir = tmp_dir("explicit_file");
    let target = dir.join("sub").join("mine.tsv");
    let resolved = resolve_out_path(Some(target.as_path()), "unused", "NIV.tsv").unwrap();
    assert_eq!(resolved, target);
    // parent directory was created on the way
    assert!(dir.join("sub").is_dir());
}

#[test]
fn grouped_verses_written_as_tsv_read_back_clean() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("ESV.tsv");

    let frags = vec![
        Fragment { chapter: 2, verse: 4, text: "These are the generations".into() },
        Fragment { chapter: 2, verse: 4, text: "of the heavens and the earth.".into() },
        Fragment { chapter: 2, verse: 5, text: "When no bush of the field".into() },
    ];

    let mut out = Vec::new();
    for verse in Verses::new("ESV", "Genesis", 2, frags) {
        tsv::write_record(&mut out, &verse).unwrap();
    }
    fs::write(&path, out).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "ESV\tGenesis\t2\t4\tThese are the generations of the heavens and the earth."
    );
    let fields: Vec<&str> = lines[1].split('\t').collect();
    assert_eq!(fields, vec!["ESV", "Genesis", "2", "5", "When no bush of the field"]);
    assert!(text.ends_with('\n'));
}
