// src/filter/state.rs
//
// FilterState: the three current facet values plus everything derived from
// them. Every change runs the same pipeline, in order:
//
//   1. visible rows      (row predicate over all records)
//   2. facet counts      (each map conditioned on the other two facets)
//   3. notify listeners  (once per change)
//
// Setting a facet to the value it already has is a no-op: no recompute, no
// notification. `clear_all` resets all three facets in one transition.

use std::sync::Arc;

use crate::data::{Dataset, VisibleView};
use crate::model::Record;

use super::counts::FacetCounts;
use super::notice;
use super::predicate::visible_indices;
use super::selection::{normalize_area, FacetSelection, MethodSelection};

/// Everything the rendering side needs after a change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSnapshot {
    pub selection: FacetSelection,
    /// Indices of visible records, in source order.
    pub visible: Vec<usize>,
    pub counts: FacetCounts,
    /// "Active filters" line; `None` when nothing is active.
    pub notice: Option<String>,
    pub any_active: bool,
    /// Bumped once per pipeline run.
    pub revision: u64,
}

pub type Listener = Box<dyn FnMut(&FilterSnapshot)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct FilterState {
    dataset: Arc<Dataset>,
    snapshot: FilterSnapshot,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Arc::new(Dataset::default()))
    }
}

impl std::fmt::Debug for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterState")
            .field("records", &self.dataset.len())
            .field("selection", &self.snapshot.selection)
            .field("visible", &self.snapshot.visible.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FilterState {
    /// Start with no constraints over `dataset`.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let mut state = Self {
            dataset,
            snapshot: FilterSnapshot::default(),
            listeners: Vec::new(),
            next_listener: 0,
        };
        state.recompute();
        state
    }

    /* ---------- observers ---------- */

    /// Register a callback run after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&FilterSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /* ---------- setters ---------- */

    pub fn set_search_text(&mut self, text: &str) -> bool {
        let next = self.snapshot.selection.with_search(text);
        self.apply(next, "search")
    }

    pub fn set_method_selection(&mut self, method: MethodSelection) -> bool {
        let next = self.snapshot.selection.with_method(method);
        self.apply(next, "method")
    }

    /// Set the method facet from a dropdown / CLI value. Values outside the
    /// taxonomy clear the facet instead of failing.
    pub fn set_method_value(&mut self, value: &str) -> bool {
        let method = match MethodSelection::parse(value) {
            Some(m) => m,
            None => {
                logw!("Filter: unknown method value {:?}, treating as no constraint", value);
                MethodSelection::None
            }
        };
        self.set_method_selection(method)
    }

    /// Set the area facet. Tags that no record carries clear the facet
    /// instead of hiding every row.
    pub fn set_area_selection(&mut self, area: Option<&str>) -> bool {
        let area = area.and_then(normalize_area);
        let area = match area {
            Some(tag) if !self.dataset.has_area(&tag) => {
                logw!("Filter: unknown area {:?}, treating as no constraint", tag);
                None
            }
            other => other,
        };
        let next = FacetSelection { area, ..self.snapshot.selection.clone() };
        self.apply(next, "area")
    }

    /// Reset every facet at once. One recompute, one notification.
    pub fn clear_all(&mut self) -> bool {
        let changed = self.apply(FacetSelection::default(), "clear");
        if changed {
            logf!("Filter: cleared all ({} records visible)", self.snapshot.visible.len());
        }
        changed
    }

    /// Swap in a freshly loaded dataset. Search and method carry over; the
    /// area facet is kept only if the new data still has that tag.
    pub fn replace_dataset(&mut self, dataset: Arc<Dataset>) {
        self.dataset = dataset;
        let keep_area = self
            .snapshot
            .selection
            .area
            .as_deref()
            .is_some_and(|tag| self.dataset.has_area(tag));
        if !keep_area {
            self.snapshot.selection.area = None;
        }
        logf!("Filter: dataset replaced ({} records)", self.dataset.len());
        self.recompute();
        self.notify();
    }

    /* ---------- getters ---------- */

    pub fn selection(&self) -> &FacetSelection { &self.snapshot.selection }
    pub fn snapshot(&self) -> &FilterSnapshot { &self.snapshot }
    pub fn counts(&self) -> &FacetCounts { &self.snapshot.counts }
    pub fn dataset(&self) -> &Arc<Dataset> { &self.dataset }
    pub fn revision(&self) -> u64 { self.snapshot.revision }
    pub fn any_active(&self) -> bool { self.snapshot.any_active }
    pub fn notice(&self) -> Option<&str> { self.snapshot.notice.as_deref() }

    pub fn visible(&self) -> VisibleView<'_> {
        VisibleView::new(&self.dataset, &self.snapshot.visible)
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.snapshot.visible.iter().filter_map(|&ix| self.dataset.records().get(ix))
    }

    /* ---------- pipeline ---------- */

    fn apply(&mut self, next: FacetSelection, what: &str) -> bool {
        if next == self.snapshot.selection {
            return false;
        }
        logd!("Filter: {} → {:?}", what, next);
        self.snapshot.selection = next;
        self.recompute();
        self.notify();
        true
    }

    fn recompute(&mut self) {
        let records = self.dataset.records();
        let selection = &self.snapshot.selection;

        let visible = visible_indices(records, selection);
        let counts = FacetCounts::compute(records, selection);
        let notice = notice::describe(selection, visible.len());
        let any_active = selection.is_active();

        self.snapshot.visible = visible;
        self.snapshot.counts = counts;
        self.snapshot.notice = notice;
        self.snapshot.any_active = any_active;
        self.snapshot.revision += 1;
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.snapshot);
        }
    }
}
