// src/filter/mod.rs
//
// Facet filtering: selection values, the single row predicate, the
// cross-filtered counts and the state holder that ties them together.

pub mod counts;
pub mod notice;
pub mod predicate;
pub mod selection;
pub mod state;

pub use counts::{
    compute_area_counts, compute_method_counts, AreaCounts, FacetCounts, MethodCounts,
    MethodOption, METHOD_OPTIONS,
};
pub use predicate::{matches, visible_indices, Matcher};
pub use selection::{FacetSelection, MethodSelection};
pub use state::{FilterSnapshot, FilterState, ListenerId};
