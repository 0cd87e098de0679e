// src/filter/selection.rs
//
// The three facet values. "No constraint" is `MethodSelection::None`,
// `area: None` and an empty (or all-whitespace) search string.

use crate::core::fold_key;
use crate::model::{normalize_tag, Method};

/// A value of the method dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MethodSelection {
    #[default]
    None,
    /// quantitative + meta-analysis + mixed-methods
    AllQuantitative,
    /// qualitative + meta-synthesis + mixed-methods
    AllQualitative,
    /// mixed-methods, listed under the quantitative group
    MixedQuantView,
    /// mixed-methods, listed under the qualitative group
    MixedQualView,
    /// A single raw category. `Category(Method::Unknown)` constrains nothing.
    Category(Method),
}

impl MethodSelection {
    /// Parse a dropdown / command-line value. Returns `None` (the Rust
    /// option, not the variant) for values outside the taxonomy.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_lowercase();
        let sel = match v.as_str() {
            "" | "none" | "all" | "all-methods" => MethodSelection::None,
            "all-quantitative" => MethodSelection::AllQuantitative,
            "all-qualitative" => MethodSelection::AllQualitative,
            "mixed-methods-quantitative" | "mixed-quant-view" => MethodSelection::MixedQuantView,
            "mixed-methods-qualitative" | "mixed-qual-view" => MethodSelection::MixedQualView,
            other => match Method::classify(other) {
                Method::Unknown => return None,
                m => MethodSelection::Category(m),
            },
        };
        Some(sel)
    }

    /// True when this selection does not narrow anything.
    pub fn is_none(&self) -> bool {
        matches!(self, MethodSelection::None | MethodSelection::Category(Method::Unknown))
    }

    /// Stable value string, accepted back by [`MethodSelection::parse`].
    pub fn value(&self) -> &'static str {
        match self {
            MethodSelection::None => "",
            MethodSelection::AllQuantitative => "all-quantitative",
            MethodSelection::AllQualitative => "all-qualitative",
            MethodSelection::MixedQuantView => "mixed-methods-quantitative",
            MethodSelection::MixedQualView => "mixed-methods-qualitative",
            MethodSelection::Category(m) => m.as_str(),
        }
    }

    /// Label used in the "active filters" line and the closed dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            MethodSelection::None | MethodSelection::Category(Method::Unknown) => "All Methods",
            MethodSelection::AllQuantitative => "All Quantitative",
            MethodSelection::AllQualitative => "All Qualitative",
            MethodSelection::MixedQuantView => "Mixed-Methods (Quantitative)",
            MethodSelection::MixedQualView => "Mixed-Methods (Qualitative)",
            MethodSelection::Category(m) => m.label(),
        }
    }
}

/// Current value of all three facets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetSelection {
    /// Search text as typed.
    pub search: String,
    pub method: MethodSelection,
    /// Normalized area tag.
    pub area: Option<String>,
}

impl FacetSelection {
    pub fn new(search: &str, method: MethodSelection, area: Option<&str>) -> Self {
        Self {
            search: s!(search),
            method,
            area: area.and_then(normalize_area),
        }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self { search: s!(search), ..self.clone() }
    }

    pub fn with_method(&self, method: MethodSelection) -> Self {
        Self { method, ..self.clone() }
    }

    pub fn with_area(&self, area: Option<&str>) -> Self {
        Self { area: area.and_then(normalize_area), ..self.clone() }
    }

    /// Whitespace-collapsed, lowercased search needle ("" = no constraint).
    /// Record haystacks are folded the same way.
    pub fn search_needle(&self) -> String {
        fold_key(&self.search)
    }

    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Any facet narrowing the rows.
    pub fn is_active(&self) -> bool {
        self.has_search() || !self.method.is_none() || self.area.is_some()
    }
}

/// Normalize an area value; empty means "no constraint".
pub fn normalize_area(raw: &str) -> Option<String> {
    let tag = normalize_tag(raw);
    if tag.is_empty() { None } else { Some(tag) }
}
