// src/display.rs
//
// One-way projection of records and counts into display strings. Nothing
// here is ever parsed back.

use crate::config::consts::AREA_SEPARATOR;
use crate::core::title_case;
use crate::filter::{FacetCounts, MethodOption, MethodSelection, METHOD_OPTIONS};
use crate::model::{Family, Record};

pub const ALL_METHODS_LABEL: &str = "All Methods";
pub const ALL_AREAS_LABEL: &str = "All Research Areas";
pub const AREAS_SORTED_HINT: &str = "[Listed A–Z]";

/// "[~N records]" suffix used on every dropdown option.
pub fn count_suffix(n: usize) -> String {
    format!("[~{} records]", n)
}

/// Display form of an area tag.
pub fn area_label(tag: &str) -> String {
    title_case(tag)
}

/// "ID: 12 | Method: Quantitative (Survey)"
pub fn heading_line(record: &Record) -> String {
    let mut line = format!("ID: {} | Method: {}", record.id, method_text(record));
    if !record.method_detail.is_empty() {
        line.push_str(&format!(" ({})", record.method_detail));
    }
    line
}

/// Method as written in the source, or the canonical label when the cell
/// was empty.
pub fn method_text(record: &Record) -> &str {
    if record.method_raw.is_empty() {
        record.method.as_str()
    } else {
        &record.method_raw
    }
}

/// "Areas: Ageing; Memory"
pub fn areas_line(record: &Record) -> String {
    join!("Areas: ", &areas_text(record))
}

/// Title-cased tags, A–Z, joined with "; ".
pub fn areas_text(record: &Record) -> String {
    record
        .areas
        .iter()
        .map(area_label)
        .collect::<Vec<_>>()
        .join(AREA_SEPARATOR)
}

/// Fallback titles for the exported columns; the last one holds every
/// area tag of a record.
pub const EXPORT_HEADERS: [&str; 6] = ["ID", "Method", "Method Detail", "Title", "Abstract", "Research Areas"];

/// Header row matching [`export_row`]: the source titles of the five fixed
/// columns (fallbacks where missing or blank), then one areas column.
pub fn export_headers(source: Option<&[String]>) -> Vec<String> {
    let fixed = EXPORT_HEADERS.len() - 1;
    let mut out: Vec<String> = (0..fixed)
        .map(|ix| {
            source
                .and_then(|h| h.get(ix))
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(String::from)
                .unwrap_or_else(|| s!(EXPORT_HEADERS[ix]))
        })
        .collect();
    out.push(s!(EXPORT_HEADERS[fixed]));
    out
}

/// Columns written by the CLI / copy output.
pub fn export_row(record: &Record) -> Vec<String> {
    vec![
        record.id.clone(),
        s!(method_text(record)),
        record.method_detail.clone(),
        record.title.clone(),
        record.abstract_text.clone(),
        areas_text(record),
    ]
}

/// One line of a dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry<T> {
    /// Non-selectable group heading
    Group(&'static str),
    /// Non-selectable hint line
    Hint(&'static str),
    Choice { value: T, label: String },
}

/// Method dropdown: "All Methods", then the quantitative and qualitative
/// groups with their counts.
pub fn method_menu(counts: &FacetCounts) -> Vec<MenuEntry<MethodSelection>> {
    let mut out = vec![MenuEntry::Choice {
        value: MethodSelection::None,
        label: s!(ALL_METHODS_LABEL),
    }];
    for (group, heading) in [(Family::Quantitative, "[Quantitative]"), (Family::Qualitative, "[Qualitative]")] {
        out.push(MenuEntry::Group(heading));
        for option in METHOD_OPTIONS.into_iter().filter(|o| o.group() == group) {
            out.push(MenuEntry::Choice {
                value: option.selection(),
                label: method_option_label(option, counts.method(option)),
            });
        }
    }
    out
}

/// "→ All Quantitative [~12 records]" / "↘ Meta-Analysis [~3 records]"
pub fn method_option_label(option: MethodOption, count: usize) -> String {
    let arrow = if option.is_family_total() { "→" } else { "↘" };
    format!("{} {} {}", arrow, option.label(), count_suffix(count))
}

/// Area dropdown: "All Research Areas", the A–Z hint, then every tag.
pub fn area_menu(counts: &FacetCounts) -> Vec<MenuEntry<Option<String>>> {
    let mut out = vec![
        MenuEntry::Choice { value: None, label: s!(ALL_AREAS_LABEL) },
        MenuEntry::Hint(AREAS_SORTED_HINT),
    ];
    out.extend(counts.areas.iter().map(|(tag, &n)| MenuEntry::Choice {
        value: Some(tag.clone()),
        label: format!("{} {}", area_label(tag), count_suffix(n)),
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> Record {
        Record::from_row(cells)
    }

    #[test]
    fn heading_with_and_without_detail() {
        let r = record(&["12", "Quantitative", "Survey"]);
        assert_eq!(heading_line(&r), "ID: 12 | Method: Quantitative (Survey)");
        let r = record(&["13", "qualitative"]);
        assert_eq!(heading_line(&r), "ID: 13 | Method: qualitative");
    }

    #[test]
    fn areas_are_title_cased_and_sorted() {
        let r = record(&["1", "", "", "", "", "public health", "Ageing"]);
        assert_eq!(areas_line(&r), "Areas: Ageing; Public Health");
    }

    #[test]
    fn export_row_has_six_columns() {
        let r = record(&["1", "meta-analysis", "", "T", "A", "Sleep"]);
        assert_eq!(export_row(&r), vec!["1", "meta-analysis", "", "T", "A", "Sleep"]);
    }

    #[test]
    fn export_headers_match_the_row_width() {
        let source: Vec<String> = ["ID", "Method", "Detail", "Title", "Abstract", "Area 1", "Area 2", "Area 3"]
            .iter()
            .map(|t| s!(*t))
            .collect();
        let headers = export_headers(Some(source.as_slice()));
        assert_eq!(headers, vec!["ID", "Method", "Detail", "Title", "Abstract", "Research Areas"]);

        let r = record(&["1", "quantitative", "", "T", "A", "x", "y", "z"]);
        assert_eq!(headers.len(), export_row(&r).len());
    }

    #[test]
    fn export_headers_fill_missing_titles() {
        let short = vec![s!("Thesis"), s!(" ")];
        assert_eq!(
            export_headers(Some(short.as_slice())),
            vec!["Thesis", "Method", "Method Detail", "Title", "Abstract", "Research Areas"]
        );
        assert_eq!(export_headers(None), EXPORT_HEADERS.to_vec());
    }

    #[test]
    fn method_menu_layout() {
        let menu = method_menu(&FacetCounts::default());
        let groups: Vec<_> = menu
            .iter()
            .filter_map(|e| match e { MenuEntry::Group(g) => Some(*g), _ => None })
            .collect();
        assert_eq!(groups, vec!["[Quantitative]", "[Qualitative]"]);
        // All Methods + 2 headings + 8 options
        assert_eq!(menu.len(), 11);
        assert_eq!(
            menu[2],
            MenuEntry::Choice {
                value: MethodSelection::AllQuantitative,
                label: s!("→ All Quantitative [~0 records]"),
            }
        );
    }
}
