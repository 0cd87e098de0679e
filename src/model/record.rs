// src/model/record.rs
//
// One thesis entry, flattened from a spreadsheet row:
//
//   0 id | 1 method | 2 method detail | 3 title | 4 abstract | 5..=10 areas
//
// Missing trailing cells are treated as empty. Records are built once at
// load time and never mutated afterwards.

use crate::config::consts::*;
use crate::core::normalize_ws;

use super::{AreaTags, Method};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Opaque identifier, display only.
    pub id: String,
    pub method: Method,
    /// Method cell as written in the source (trimmed), display only.
    pub method_raw: String,
    pub method_detail: String,
    pub title: String,
    pub abstract_text: String,
    pub areas: AreaTags,

    /// Lowercased concatenation of every searchable field.
    search_text: String,
}

impl Record {
    /// Build a record from a row of cells. Never fails: absent cells are
    /// empty, an absent or unrecognized method is `Method::Unknown`.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let cell = |ix: usize| row.get(ix).map(|c| c.as_ref().trim()).unwrap_or("");

        let method_raw = s!(cell(COL_METHOD));
        let method = Method::classify(&method_raw);
        if !method.is_known() && !method_raw.is_empty() {
            logd!("Record: unrecognized method {:?} (id={})", method_raw, cell(COL_ID));
        }

        let mut record = Self {
            id: s!(cell(COL_ID)),
            method,
            method_raw,
            method_detail: s!(cell(COL_METHOD_DETAIL)),
            title: s!(cell(COL_TITLE)),
            abstract_text: s!(cell(COL_ABSTRACT)),
            areas: AreaTags::from_row(row),
            search_text: s!(),
        };
        record.search_text = record.build_search_text();
        record
    }

    fn build_search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.method.as_str(),
            self.method_raw.as_str(),
            self.method_detail.as_str(),
        ];
        parts.extend(self.areas.iter());
        normalize_ws(&parts.join(" ")).to_lowercase()
    }

    /// Lowercased haystack for free-text search.
    #[inline]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// True when every cell of the row is blank (trailing spreadsheet rows).
    pub fn is_blank_row<S: AsRef<str>>(row: &[S]) -> bool {
        row.iter().all(|c| c.as_ref().trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row() {
        let r = Record::from_row(&[
            "12", " Quantitative ", "Survey", "Twin study", "We studied twins.",
            "Genetics", "Behaviour Genetics", "", "", "", "",
        ]);
        assert_eq!(r.id, "12");
        assert_eq!(r.method, Method::Quantitative);
        assert_eq!(r.method_raw, "Quantitative");
        assert_eq!(r.method_detail, "Survey");
        assert_eq!(r.title, "Twin study");
        assert_eq!(r.abstract_text, "We studied twins.");
        assert_eq!(r.areas.joined(), "behaviour genetics; genetics");
    }

    #[test]
    fn missing_cells_default_to_empty() {
        let r = Record::from_row(&["3"]);
        assert_eq!(r.id, "3");
        assert_eq!(r.method, Method::Unknown);
        assert!(r.title.is_empty());
        assert!(r.areas.is_empty());

        let empty: [&str; 0] = [];
        let r = Record::from_row(&empty);
        assert!(r.id.is_empty());
        assert_eq!(r.search_text(), "");
    }

    #[test]
    fn unknown_method_keeps_raw_text() {
        let r = Record::from_row(&["4", "Survey"]);
        assert_eq!(r.method, Method::Unknown);
        assert_eq!(r.method_raw, "Survey");
    }

    #[test]
    fn search_text_covers_display_fields() {
        let r = Record::from_row(&[
            "5", "meta-synthesis", "Thematic", "Coping", "Carers of people with dementia",
            "Ageing",
        ]);
        let hay = r.search_text();
        for needle in ["coping", "carers", "meta-synthesis", "thematic", "ageing"] {
            assert!(hay.contains(needle), "{needle} missing from {hay:?}");
        }
        assert!(!hay.contains('5'));
    }

    #[test]
    fn blank_rows() {
        assert!(Record::is_blank_row(&["", "  ", "\t"]));
        assert!(!Record::is_blank_row(&["", "x"]));
    }
}
