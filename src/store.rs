// src/store.rs
//
// Dataset loading: file on disk -> rows of text -> immutable Dataset.

use std::fs;
use std::path::Path;

use crate::config::options::{LoadOptions, SourceFormat};
use crate::csv::parse_rows;
use crate::data::Dataset;
use crate::error::LoadError;
use crate::workbook::read_sheet_rows;

/// Load the dataset described by `opts`.
pub fn load_dataset(opts: &LoadOptions) -> Result<Dataset, LoadError> {
    let path = opts.path.as_path();
    let format = opts
        .resolved_format()
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    logf!("Load: {} ({:?})", path.display(), format);

    let rows = read_rows(path, format, opts.sheet.as_deref())?;
    let total = rows.len();
    let ds = Dataset::from_rows(rows, opts.skip_header).with_source(path);

    logf!(
        "Load: {} record(s) from {} row(s), {} area tag(s)",
        ds.len(),
        total,
        ds.areas().len()
    );
    Ok(ds)
}

/// Rows of text cells from either a workbook or a delimited text file.
pub fn read_rows(
    path: &Path,
    format: SourceFormat,
    sheet: Option<&str>,
) -> Result<Vec<Vec<String>>, LoadError> {
    match format.delim() {
        None => read_sheet_rows(path, sheet),
        Some(sep) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(parse_rows(&text, sep))
        }
    }
}
