// src/tsv.rs
use std::io::{self, Write};

use crate::verse::Verse;

/// One output line: `version\tbook\tchapter\tverse\ttext`.
///
/// Fields are written as-is. An embedded tab or newline in the verse text
/// would corrupt the record; the source never produces them, and this
/// format knowingly does not escape (consumers split on the first four
/// tabs at most).
pub fn line(v: &Verse) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        v.version, v.book, v.chapter, v.verse, v.text
    )
}

/// Write one record, newline-terminated.
pub fn write_record<W: Write>(mut w: W, v: &Verse) -> io::Result<()> {
    writeln!(w, "{}", line(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(text: &str) -> Verse {
        Verse {
            version: s!("ESV"),
            book: s!("Genesis"),
            chapter: 2,
            verse: 4,
            text: s!(text),
        }
    }

    #[test]
    fn five_fields_tab_separated() {
        assert_eq!(
            line(&verse("These are the generations")),
            "ESV\tGenesis\t2\t4\tThese are the generations"
        );
    }

    #[test]
    fn text_is_not_escaped() {
        // Accepted limitation: pathological text passes straight through.
        assert_eq!(
            line(&verse("a\tb")),
            "ESV\tGenesis\t2\t4\ta\tb"
        );
    }

    #[test]
    fn records_are_newline_terminated() {
        let mut buf = Vec::new();
        write_record(&mut buf, &verse("x")).unwrap();
        write_record(&mut buf, &verse("y")).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "ESV\tGenesis\t2\t4\tx\nESV\tGenesis\t2\t4\ty\n");
    }
}
