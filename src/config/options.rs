// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub load: LoadOptions,
    pub export: ExportOptions,
}

/// How a dataset file is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// .xlsx / .xlsm / .xlsb / .xls / .ods, read through calamine
    Workbook,
    Csv,
    Tsv,
}

impl SourceFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Workbook),
            "csv" => Some(SourceFormat::Csv),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            _ => None,
        }
    }

    /// Field separator for delimited text; `None` for workbooks.
    pub fn delim(&self) -> Option<char> {
        match self {
            SourceFormat::Workbook => None,
            SourceFormat::Csv => Some(','),
            SourceFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub path: PathBuf,
    /// Worksheet to read; first sheet when `None`.
    pub sheet: Option<String>,
    /// Drop the first row (column titles).
    pub skip_header: bool,
    /// Force a format instead of guessing from the extension.
    pub format: Option<SourceFormat>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE),
            sheet: None,
            skip_header: true,
            format: None,
        }
    }
}

impl LoadOptions {
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    pub fn resolved_format(&self) -> Option<SourceFormat> {
        self.format.or_else(|| SourceFormat::from_path(&self.path))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Output of visible rows (CLI).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}
