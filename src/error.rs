// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Why a dataset could not be loaded. The filters never see these: on error
/// the previous dataset (possibly empty) stays in place.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook `{}` has no worksheets", .0.display())]
    NoSheets(PathBuf),

    #[error("worksheet `{0}` not found")]
    MissingSheet(String),

    #[error("unsupported file type `{}` (expected .xlsx, .xls, .ods, .csv or .tsv)", .0.display())]
    UnsupportedFormat(PathBuf),
}
