// src/cli.rs
//
// Command-line front end: load a spreadsheet, apply the three facets and
// print the notice, optional facet counts and the visible rows.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::consts::{DEFAULT_DATA_DIR, DEFAULT_DATA_FILE};
use crate::config::options::{ExportFormat, ExportOptions, LoadOptions};
use crate::csv::write_records;
use crate::display::{self, MenuEntry};
use crate::error::LoadError;
use crate::filter::FilterState;
use crate::store;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Search and filter a spreadsheet of thesis abstracts.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Spreadsheet to read (.xlsx, .xls, .ods, .csv, .tsv)
    pub path: Option<PathBuf>,

    /// Worksheet name (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// The first row is data, not column titles
    #[arg(long)]
    pub no_header: bool,

    /// Case-insensitive text to look for in titles, abstracts, methods and areas
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Method filter: all-quantitative, all-qualitative, quantitative, qualitative,
    /// meta-analysis, meta-synthesis, mixed-methods-quantitative, mixed-methods-qualitative
    #[arg(short, long)]
    pub method: Option<String>,

    /// Research area filter (exact tag, case-insensitive)
    #[arg(short, long)]
    pub area: Option<String>,

    /// Print the method and area dropdowns with their counts
    #[arg(long)]
    pub counts: bool,

    /// Print only the area list with counts
    #[arg(long)]
    pub list_areas: bool,

    /// Row output format
    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    pub format: FormatArg,

    /// Emit the header row before the records
    #[arg(long)]
    pub headers: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn load_options(&self) -> LoadOptions {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE));
        LoadOptions {
            path,
            sheet: self.sheet.clone(),
            skip_header: !self.no_header,
            format: None,
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { format: self.format.into(), include_headers: self.headers }
    }
}

/// Parse process arguments and run against stdout.
pub fn run() -> Result<(), CliError> {
    let args = Args::parse();
    crate::log::init(&args.log_level);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run_with(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load, filter and print.
pub fn run_with<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let dataset = store::load_dataset(&args.load_options())?;
    let mut state = FilterState::new(Arc::new(dataset));

    state.set_search_text(&args.search);
    if let Some(m) = &args.method {
        state.set_method_value(m);
    }
    if let Some(a) = &args.area {
        state.set_area_selection(Some(a));
    }

    if args.list_areas {
        write_menu(out, &display::area_menu(state.counts()))?;
        return Ok(());
    }

    if let Some(notice) = state.notice() {
        writeln!(out, "# {}", notice)?;
    }

    if args.counts {
        writeln!(out, "# Methods")?;
        write_menu(out, &display::method_menu(state.counts()))?;
        writeln!(out, "# Research areas")?;
        write_menu(out, &display::area_menu(state.counts()))?;
        writeln!(out)?;
    }

    let ds = state.dataset().clone();
    write_records(&mut *out, ds.headers(), state.visible_records(), &args.export_options())?;
    Ok(())
}

fn write_menu<W: Write, T>(out: &mut W, menu: &[MenuEntry<T>]) -> io::Result<()> {
    for entry in menu {
        match entry {
            MenuEntry::Group(g) => writeln!(out, "  {}", g)?,
            MenuEntry::Hint(_) => {}
            MenuEntry::Choice { label, .. } => writeln!(out, "    {}", label)?,
        }
    }
    Ok(())
}
