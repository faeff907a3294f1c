//! Rendering listing rows for the terminal.

use std::io::{self, Write};

use roster::ListingRow;

pub const HEADER: &str = "ID\tName\tKorean\tEnglish\tMath\tScience\tTotal";
const RULE: &str = "--------------------------------------------------";

/// One tab-separated line per row, under a header and a rule.
pub fn render_table(rows: &[ListingRow]) -> String {
    let mut out = format!("{HEADER}\n{RULE}\n");
    for row in rows {
        let s = &row.scores;
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            row.id, row.name, s.korean, s.english, s.math, s.science, row.total
        ));
    }
    out
}

pub fn write_rows(out: &mut impl Write, rows: &[ListingRow], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, rows)?;
        writeln!(out)?;
    } else {
        out.write_all(render_table(rows).as_bytes())?;
    }
    Ok(())
}

pub fn print_rows(rows: &[ListingRow], json: bool) -> anyhow::Result<()> {
    write_rows(&mut io::stdout().lock(), rows, json)
}
