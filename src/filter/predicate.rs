// src/filter/predicate.rs
//
// The row predicate. This is the only place that decides whether a record
// matches a selection; visibility and every facet count go through it.
//
//   match = search AND method AND area

use crate::model::{AreaTags, Method, Record};

use super::selection::{FacetSelection, MethodSelection};

/// Does `record` pass all three facets of `selection`?
pub fn matches(record: &Record, selection: &FacetSelection) -> bool {
    Matcher::new(selection).matches(record)
}

/// Indices (into `records`) of every matching record, in source order.
pub fn visible_indices(records: &[Record], selection: &FacetSelection) -> Vec<usize> {
    let m = Matcher::new(selection);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| m.matches(r))
        .map(|(ix, _)| ix)
        .collect()
}

/// A selection prepared for repeated evaluation: the search needle is
/// lowercased once, and single facets can be swapped out for counting.
#[derive(Clone, Debug)]
pub struct Matcher<'a> {
    needle: String,
    method: MethodSelection,
    area: Option<&'a str>,
}

impl<'a> Matcher<'a> {
    pub fn new(selection: &'a FacetSelection) -> Self {
        Self {
            needle: selection.search_needle(),
            method: selection.method,
            area: selection.area.as_deref(),
        }
    }

    /// Same search and area, different method.
    pub fn with_method(&self, method: MethodSelection) -> Self {
        Self { method, ..self.clone() }
    }

    /// Same search and method, different area. `area` must be normalized.
    pub fn with_area<'b>(&self, area: Option<&'b str>) -> Matcher<'b>
    where
        'a: 'b,
    {
        Matcher { needle: self.needle.clone(), method: self.method, area }
    }

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        search_matches(record, &self.needle)
            && method_matches(record.method, self.method)
            && area_matches(&record.areas, self.area)
    }
}

/// Case-insensitive substring test. `needle` must already be lowercased;
/// an empty needle matches everything.
#[inline]
pub fn search_matches(record: &Record, needle: &str) -> bool {
    needle.is_empty() || record.search_text().contains(needle)
}

pub fn method_matches(method: Method, selection: MethodSelection) -> bool {
    match selection {
        MethodSelection::None | MethodSelection::Category(Method::Unknown) => true,
        MethodSelection::AllQuantitative => method.family().is_quantitative(),
        MethodSelection::AllQualitative => method.family().is_qualitative(),
        MethodSelection::MixedQuantView | MethodSelection::MixedQualView => {
            method == Method::MixedMethods
        }
        MethodSelection::Category(category) => method == category,
    }
}

/// Exact tag membership; `None` matches everything.
#[inline]
pub fn area_matches(tags: &AreaTags, area: Option<&str>) -> bool {
    match area {
        None => true,
        Some(tag) => tags.contains(tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_methods_is_in_both_family_selectors() {
        assert!(method_matches(Method::MixedMethods, MethodSelection::AllQuantitative));
        assert!(method_matches(Method::MixedMethods, MethodSelection::AllQualitative));
        assert!(method_matches(Method::MixedMethods, MethodSelection::MixedQuantView));
        assert!(method_matches(Method::MixedMethods, MethodSelection::MixedQualView));
    }

    #[test]
    fn family_selectors() {
        use Method::*;
        let quant = MethodSelection::AllQuantitative;
        let qual = MethodSelection::AllQualitative;
        assert!(method_matches(Quantitative, quant) && method_matches(MetaAnalysis, quant));
        assert!(!method_matches(Qualitative, quant) && !method_matches(MetaSynthesis, quant));
        assert!(method_matches(Qualitative, qual) && method_matches(MetaSynthesis, qual));
        assert!(!method_matches(Quantitative, qual) && !method_matches(MetaAnalysis, qual));
        assert!(!method_matches(Unknown, quant) && !method_matches(Unknown, qual));
    }

    #[test]
    fn mixed_views_only_match_mixed_methods() {
        for m in crate::model::ALL_METHODS {
            let expect = m == Method::MixedMethods;
            assert_eq!(method_matches(m, MethodSelection::MixedQuantView), expect);
            assert_eq!(method_matches(m, MethodSelection::MixedQualView), expect);
        }
    }

    #[test]
    fn raw_category_is_exact() {
        let sel = MethodSelection::Category(Method::MetaAnalysis);
        assert!(method_matches(Method::MetaAnalysis, sel));
        assert!(!method_matches(Method::Quantitative, sel));
        assert!(!method_matches(Method::MixedMethods, sel));
    }

    #[test]
    fn unknown_method_only_passes_without_constraint() {
        assert!(method_matches(Method::Unknown, MethodSelection::None));
        assert!(!method_matches(Method::Unknown, MethodSelection::Category(Method::Quantitative)));
    }
}
