// src/filter/counts.rs
//
// Cross-filtered facet counts. The count for an option is the number of
// records that would be visible if that option replaced the current value
// of its own facet while the other two facets stay as they are.
//
// Counts go through the same `Matcher` as row visibility.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Family, Method, Record};

use super::predicate::Matcher;
use super::selection::{FacetSelection, MethodSelection};

/// The countable entries of the method dropdown, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodOption {
    AllQuantitative,
    Quantitative,
    MetaAnalysis,
    MixedQuantView,
    AllQualitative,
    Qualitative,
    MetaSynthesis,
    MixedQualView,
}

pub const METHOD_OPTIONS: [MethodOption; 8] = [
    MethodOption::AllQuantitative,
    MethodOption::Quantitative,
    MethodOption::MetaAnalysis,
    MethodOption::MixedQuantView,
    MethodOption::AllQualitative,
    MethodOption::Qualitative,
    MethodOption::MetaSynthesis,
    MethodOption::MixedQualView,
];

impl MethodOption {
    pub fn selection(self) -> MethodSelection {
        match self {
            MethodOption::AllQuantitative => MethodSelection::AllQuantitative,
            MethodOption::Quantitative => MethodSelection::Category(Method::Quantitative),
            MethodOption::MetaAnalysis => MethodSelection::Category(Method::MetaAnalysis),
            MethodOption::MixedQuantView => MethodSelection::MixedQuantView,
            MethodOption::AllQualitative => MethodSelection::AllQualitative,
            MethodOption::Qualitative => MethodSelection::Category(Method::Qualitative),
            MethodOption::MetaSynthesis => MethodSelection::Category(Method::MetaSynthesis),
            MethodOption::MixedQualView => MethodSelection::MixedQualView,
        }
    }

    /// Dropdown group the option is listed under.
    pub fn group(self) -> Family {
        match self {
            MethodOption::AllQuantitative
            | MethodOption::Quantitative
            | MethodOption::MetaAnalysis
            | MethodOption::MixedQuantView => Family::Quantitative,
            _ => Family::Qualitative,
        }
    }

    /// Option text inside its group.
    pub fn label(self) -> &'static str {
        match self {
            MethodOption::AllQuantitative => "All Quantitative",
            MethodOption::AllQualitative => "All Qualitative",
            MethodOption::MixedQuantView | MethodOption::MixedQualView => "Mixed-Methods",
            other => match other.selection() {
                MethodSelection::Category(m) => m.label(),
                _ => "",
            },
        }
    }

    pub fn is_family_total(self) -> bool {
        matches!(self, MethodOption::AllQuantitative | MethodOption::AllQualitative)
    }
}

impl From<MethodOption> for MethodSelection {
    fn from(option: MethodOption) -> Self {
        option.selection()
    }
}

pub type MethodCounts = BTreeMap<MethodOption, usize>;
/// Keyed by normalized tag, iterated A–Z.
pub type AreaCounts = BTreeMap<String, usize>;

/// Count every method option under the given area and search constraints.
pub fn compute_method_counts(records: &[Record], area: Option<&str>, search: &str) -> MethodCounts {
    let base = FacetSelection::new(search, MethodSelection::None, area);
    method_counts_for(records, &base)
}

/// Count every area tag present in `records` under the given method and
/// search constraints. Tags with no matching record are listed with 0.
pub fn compute_area_counts(records: &[Record], method: MethodSelection, search: &str) -> AreaCounts {
    let base = FacetSelection::new(search, method, None);
    area_counts_for(records, &base)
}

/// Method counts conditioned on `selection`'s search and area; its own
/// method value is ignored.
pub fn method_counts_for(records: &[Record], selection: &FacetSelection) -> MethodCounts {
    let base = Matcher::new(selection);
    METHOD_OPTIONS
        .into_iter()
        .map(|option| {
            let m = base.with_method(option.selection());
            (option, records.iter().filter(|r| m.matches(r)).count())
        })
        .collect()
}

/// Area counts conditioned on `selection`'s search and method; its own
/// area value is ignored.
pub fn area_counts_for(records: &[Record], selection: &FacetSelection) -> AreaCounts {
    let mut counts: AreaCounts = area_universe(records)
        .into_iter()
        .map(|tag| (tag, 0))
        .collect();

    // A record matches area `t` iff it passes the other facets and carries
    // `t`, so one pass over the area-free matches fills every bucket.
    let without_area = Matcher::new(selection).with_area(None);
    for record in records.iter().filter(|r| without_area.matches(r)) {
        for tag in record.areas.iter() {
            if let Some(n) = counts.get_mut(tag) {
                *n += 1;
            }
        }
    }
    counts
}

/// Every distinct area tag across `records`, A–Z.
pub fn area_universe(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.areas.iter())
        .map(|t| s!(t))
        .collect()
}

/// Both count maps for one selection, each conditioned on the other two
/// facets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub methods: MethodCounts,
    pub areas: AreaCounts,
}

impl FacetCounts {
    pub fn compute(records: &[Record], selection: &FacetSelection) -> Self {
        Self {
            methods: method_counts_for(records, selection),
            areas: area_counts_for(records, selection),
        }
    }

    pub fn method(&self, option: MethodOption) -> usize {
        self.methods.get(&option).copied().unwrap_or(0)
    }

    /// Count for a tag; 0 for tags that are not in the dataset.
    pub fn area(&self, tag: &str) -> usize {
        self.areas.get(tag).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_narrows_and_values_are_distinct() {
        let mut values: Vec<&str> = METHOD_OPTIONS.iter().map(|o| o.selection().value()).collect();
        assert!(METHOD_OPTIONS.iter().all(|o| !o.selection().is_none()));
        values.sort();
        values.dedup();
        assert_eq!(values.len(), METHOD_OPTIONS.len());
        assert_eq!(MethodSelection::from(MethodOption::MetaAnalysis), MethodSelection::Category(Method::MetaAnalysis));
    }

    #[test]
    fn groups_and_labels() {
        assert_eq!(MethodOption::MixedQuantView.group(), Family::Quantitative);
        assert_eq!(MethodOption::MixedQualView.group(), Family::Qualitative);
        assert_eq!(MethodOption::MetaSynthesis.label(), "Meta-Synthesis");
        assert_eq!(MethodOption::MixedQualView.label(), "Mixed-Methods");
        assert!(MethodOption::AllQualitative.is_family_total());
        assert!(!MethodOption::Qualitative.is_family_total());
    }

    #[test]
    fn empty_dataset_counts_are_zero() {
        let counts = FacetCounts::compute(&[], &FacetSelection::default());
        assert_eq!(counts.methods.len(), METHOD_OPTIONS.len());
        assert!(counts.methods.values().all(|&n| n == 0));
        assert!(counts.areas.is_empty());
    }
}
