// src/filter/notice.rs
//
// The "active filters" line and the clear control text.

use crate::core::title_case;

use super::selection::FacetSelection;

pub const NO_RESULTS: &str = "No results found with the current filter combination. \
Try adjusting the individual filters or clear all filters.";

pub const CLEAR_IDLE: &str = "No filters active";
pub const CLEAR_READY: &str = "Click to clear all filters";

/// One `Facet: "value"` entry per active facet, in search/method/area order.
pub fn active_filters(selection: &FacetSelection) -> Vec<String> {
    let mut parts = Vec::with_capacity(3);
    if selection.has_search() {
        parts.push(format!("Search: \"{}\"", selection.search.trim()));
    }
    if !selection.method.is_none() {
        parts.push(format!("Method: \"{}\"", selection.method.label()));
    }
    if let Some(area) = &selection.area {
        parts.push(format!("Area: \"{}\"", title_case(area)));
    }
    parts
}

/// Notice text for the current selection, or `None` when no facet is
/// active.
pub fn describe(selection: &FacetSelection, visible: usize) -> Option<String> {
    let parts = active_filters(selection);
    if parts.is_empty() {
        return None;
    }
    if visible == 0 {
        return Some(s!(NO_RESULTS));
    }
    Some(format!(
        "Active Filters: {} | {} record(s) found.",
        parts.join(" + "),
        visible
    ))
}

pub fn clear_label(any_active: bool) -> &'static str {
    if any_active { CLEAR_READY } else { CLEAR_IDLE }
}
