// tests/facet_counts.rs

use pretty_assertions::assert_eq;
use thesis_browser::filter::{
    compute_area_counts, compute_method_counts, visible_indices, FacetCounts, FacetSelection,
    MethodOption, MethodSelection, METHOD_OPTIONS,
};
use thesis_browser::Record;

fn records() -> Vec<Record> {
    let rows: &[&[&str]] = &[
        &["1", "quantitative", "", "Twin study", "", "genetics"],
        &["2", "meta-analysis", "", "Pooled effects", "", "genetics", "ageing"],
        &["3", "mixed-methods", "", "Sleep diaries", "", "sleep"],
        &["4", "qualitative", "", "Grief", "", "ageing"],
        &["5", "meta-synthesis", "", "Carers", "", "ageing", "sleep"],
        &["6", "survey", "", "Twin survey", "", "genetics"],
        &["7", "mixed-methods", "", "Twin sleep", "", "genetics", "sleep"],
    ];
    rows.iter().map(|&r| Record::from_row(r)).collect()
}

#[test]
fn family_totals_are_the_sum_of_their_members() {
    let records = records();
    for area in [None, Some("genetics"), Some("ageing"), Some("sleep")] {
        for search in ["", "twin", "s"] {
            let c = compute_method_counts(&records, area, search);
            let get = |o: MethodOption| c.get(&o).copied().unwrap_or(0);
            assert_eq!(
                get(MethodOption::AllQuantitative),
                get(MethodOption::Quantitative) + get(MethodOption::MetaAnalysis) + get(MethodOption::MixedQuantView),
                "quantitative, area={area:?} search={search:?}"
            );
            assert_eq!(
                get(MethodOption::AllQualitative),
                get(MethodOption::Qualitative) + get(MethodOption::MetaSynthesis) + get(MethodOption::MixedQualView),
                "qualitative, area={area:?} search={search:?}"
            );
        }
    }
}

#[test]
fn mixed_methods_count_on_both_sides() {
    let c = compute_method_counts(&records(), None, "");
    assert_eq!(c[&MethodOption::MixedQuantView], 2);
    assert_eq!(c[&MethodOption::MixedQualView], 2);
    assert_eq!(c[&MethodOption::AllQuantitative], 4);
    assert_eq!(c[&MethodOption::AllQualitative], 4);
}

#[test]
fn unknown_methods_are_in_no_canonical_count() {
    let records = records();
    let c = compute_method_counts(&records, None, "survey");
    assert!(METHOD_OPTIONS.iter().all(|o| c[o] == 0));
    // ...but it is still visible without a method constraint
    let sel = FacetSelection::default().with_search("survey");
    assert_eq!(visible_indices(&records, &sel), vec![5]);
}

#[test]
fn counts_are_conditioned_on_the_other_facets() {
    let records = records();
    let c = compute_method_counts(&records, Some("genetics"), "twin");
    assert_eq!(c[&MethodOption::Quantitative], 1);
    assert_eq!(c[&MethodOption::MetaAnalysis], 0);
    assert_eq!(c[&MethodOption::MixedQuantView], 1);

    let a = compute_area_counts(&records, MethodSelection::AllQualitative, "");
    assert_eq!(a["ageing"], 2);
    assert_eq!(a["sleep"], 3);
    assert_eq!(a["genetics"], 1);
}

#[test]
fn areas_without_matches_are_still_listed() {
    let a = compute_area_counts(&records(), MethodSelection::Category(thesis_browser::Method::MetaAnalysis), "");
    let tags: Vec<&str> = a.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["ageing", "genetics", "sleep"]);
    assert_eq!(a["sleep"], 0);
}

#[test]
fn recomputation_is_idempotent() {
    let records = records();
    let sel = FacetSelection::new("twin", MethodSelection::AllQuantitative, Some("genetics"));
    let first = FacetCounts::compute(&records, &sel);
    let second = FacetCounts::compute(&records, &sel);
    assert_eq!(first, second);
    assert_eq!(
        compute_method_counts(&records, Some("sleep"), ""),
        compute_method_counts(&records, Some("sleep"), "")
    );
}

#[test]
fn facet_counts_ignore_their_own_facet() {
    let records = records();
    let narrow = FacetSelection::new("", MethodSelection::Category(thesis_browser::Method::Qualitative), Some("ageing"));
    let c = FacetCounts::compute(&records, &narrow);
    // method counts see the area but not the method; area counts the reverse
    assert_eq!(c.method(MethodOption::MetaAnalysis), 1);
    assert_eq!(c.area("genetics"), 0);
    assert_eq!(c.area("ageing"), 1);
    assert_eq!(c.area("no such tag"), 0);
}
