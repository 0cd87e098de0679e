// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::options::ExportOptions;
use crate::display::{export_headers, export_row};
use crate::model::Record;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser: quoted fields, doubled quotes, CRLF and a
/// leading UTF-8 BOM. Empty lines are skipped. std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline (or with an unterminated quote).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let empty_line = row.len() == 1 && row[0].is_empty();
    if !empty_line {
        rows.push(row);
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write records (in the given order) with the export options' delimiter,
/// preceded by a header row of the same width when asked for. `headers`
/// are the source titles; only the five fixed columns are taken from them.
pub fn write_records<'a, W, I>(
    mut w: W,
    headers: Option<&[String]>,
    records: I,
    opts: &ExportOptions,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let sep = opts.format.delim();
    if opts.include_headers {
        write_row(&mut w, &export_headers(headers), sep)?;
    }
    for r in records {
        write_row(&mut w, &export_row(r), sep)?;
    }
    Ok(())
}

/// Records as one CSV/TSV string.
pub fn records_to_string<'a, I>(headers: Option<&[String]>, records: I, opts: &ExportOptions) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_records(&mut buf, headers, records, opts);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
