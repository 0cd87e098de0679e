// src/data.rs
//
// Light wrappers around the loaded records.
//
// - Dataset: read-only collection produced by one load. A reload builds a
//            new Dataset; nothing patches an existing one.
// - VisibleView: zero-copy projection of a Dataset through a list of row
//                indices (the rows that pass the current filters).

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::filter::counts::area_universe;
use crate::model::Record;

/// Authoritative, immutable dataset.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    headers: Option<Vec<String>>,
    records: Vec<Record>,
    areas: BTreeSet<String>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(headers: Option<Vec<String>>, records: Vec<Record>) -> Self {
        let areas = area_universe(&records);
        Self { headers, records, areas, source: None }
    }

    /// Build from parsed rows. With `skip_header` the first row becomes the
    /// header row. Blank rows are dropped; every other row becomes a record.
    pub fn from_rows(rows: Vec<Vec<String>>, skip_header: bool) -> Self {
        let mut rows = rows.into_iter();
        let headers = if skip_header { rows.next() } else { None };

        let mut skipped = 0usize;
        let records: Vec<Record> = rows
            .filter(|row| {
                let blank = Record::is_blank_row(row);
                if blank { skipped += 1; }
                !blank
            })
            .map(|row| Record::from_row(&row))
            .collect();

        if skipped > 0 {
            logd!("Dataset: skipped {} blank row(s)", skipped);
        }
        Self::new(headers, records)
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn headers(&self) -> Option<&[String]> { self.headers.as_deref() }
    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Every distinct area tag, A–Z.
    pub fn areas(&self) -> &BTreeSet<String> { &self.areas }

    pub fn has_area(&self, tag: &str) -> bool { self.areas.contains(tag) }
}

/// Filtered view for display.
/// Holds positions of kept records into a Dataset.
#[derive(Clone, Debug)]
pub struct VisibleView<'a> {
    pub row_ix: &'a [usize],
    raw: &'a Dataset,
}

impl<'a> VisibleView<'a> {
    pub fn new(raw: &'a Dataset, row_ix: &'a [usize]) -> Self {
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a record by projected index.
    pub fn record(&self, i: usize) -> Option<&'a Record> {
        self.row_ix.get(i).and_then(|&ix| self.raw.records().get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.records().get(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect()
    }

    #[test]
    fn header_row_and_blank_rows() {
        let ds = Dataset::from_rows(
            rows(&[
                &["ID", "Method", "Detail", "Title", "Abstract", "Area 1"],
                &["1", "quantitative", "", "A", "", "Genetics"],
                &["", "", ""],
                &["2", "qualitative", "", "B", "", "Criminology"],
            ]),
            true,
        );
        assert_eq!(ds.headers().map(|h| h.len()), Some(6));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.areas().iter().cloned().collect::<Vec<_>>(), vec!["criminology", "genetics"]);
        assert!(ds.has_area("genetics"));
        assert!(!ds.has_area("gen"));
    }

    #[test]
    fn view_projects_rows() {
        let ds = Dataset::from_rows(
            rows(&[&["1", "quantitative"], &["2", "qualitative"], &["3", "meta-analysis"]]),
            false,
        );
        let ix = vec![2, 0];
        let view = VisibleView::new(&ds, &ix);
        assert_eq!(view.len(), 2);
        assert_eq!(view.record(0).map(|r| r.id.as_str()), Some("3"));
        assert_eq!(view.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["3", "1"]);
        assert!(view.record(5).is_none());
    }
}
