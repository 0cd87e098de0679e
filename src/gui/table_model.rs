// src/gui/table_model.rs
//! TableModel: display projection of the visible records.
//!
//! Rebuilt from a `FilterState` whenever the filters change, so the table
//! component only renders strings and never touches the predicate.

use crate::display;
use crate::filter::FilterState;

pub const HEADERS: [&str; 4] = ["ID", "Method", "Title", "Research Areas"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Index into the dataset's records
    pub source_ix: usize,
    pub id: String,
    pub method: String,
    pub title: String,
    pub areas: String,
}

#[derive(Clone, Debug, Default)]
pub struct TableModel {
    pub rows: Vec<TableRow>,
    /// Filter revision this model was built from
    pub revision: u64,
}

impl TableModel {
    pub fn from_state(filter: &FilterState) -> Self {
        let view = filter.visible();
        let rows = view
            .row_ix
            .iter()
            .zip(view.iter())
            .map(|(&source_ix, r)| TableRow {
                source_ix,
                id: r.id.clone(),
                method: s!(display::method_text(r)),
                title: r.title.clone(),
                areas: display::areas_text(r),
            })
            .collect();
        Self { rows, revision: filter.revision() }
    }

    #[inline]
    pub fn nrows(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Display position of a source record, if it is visible.
    pub fn position_of(&self, source_ix: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.source_ix == source_ix)
    }
}
