// src/model/area.rs
//
// Research-area tags. A record carries up to AREA_COLUMNS source cells; each
// non-empty cell becomes one normalized tag. Matching is by exact tag, never
// by substring ("health" does not match "public health").

use std::collections::BTreeSet;

use crate::config::consts::{AREA_COLUMNS, AREA_SEPARATOR, COL_AREA_FIRST};
use crate::core::fold_key;

/// Canonical form of an area value: whitespace-collapsed, lowercase.
pub fn normalize_tag(raw: &str) -> String {
    fold_key(raw)
}

/// Deduplicated, normalized set of area tags, iterated A–Z.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaTags(BTreeSet<String>);

impl AreaTags {
    /// Build from raw cell values. Empty cells are dropped; values that
    /// normalize to the same tag collapse.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = cells
            .into_iter()
            .map(|c| normalize_tag(c.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self(tags)
    }

    /// Take the area block (columns 5..=10) of a source row. Short rows are
    /// fine: missing cells count as empty.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let end = (COL_AREA_FIRST + AREA_COLUMNS).min(row.len());
        let block = row.get(COL_AREA_FIRST..end).unwrap_or(&[]);
        Self::from_cells(block)
    }

    /// Exact membership. `tag` is expected to be normalized already.
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Tags joined with "; " in alphabetical order.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(AREA_SEPARATOR)
    }
}

impl<'a> IntoIterator for &'a AreaTags {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
