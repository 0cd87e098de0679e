// src/workbook.rs
//
// Spreadsheet input through calamine. Only cell values are read; every cell
// becomes display text so the rest of the crate deals with rows of strings,
// exactly as for CSV/TSV input.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::LoadError;

/// Read one worksheet (the first one when `sheet` is `None`) as rows of
/// text cells. Rows keep their spreadsheet width; the caller decides what
/// is blank.
pub fn read_sheet_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| LoadError::MissingSheet(s!(wanted)))?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoSheets(path.to_path_buf()))?,
    };

    let range = workbook.worksheet_range(&name)?;
    logd!(
        "Workbook: sheet {:?} of {} ({} x {})",
        name,
        path.display(),
        range.height(),
        range.width()
    );

    Ok(range_rows(&range))
}

/// Rows of a used range as text. Range rows and columns are relative to
/// `range.start()`: leading blank rows are dropped so the header comes
/// first, but leading blank columns are restored so every cell keeps its
/// absolute column (column A is always index 0).
pub fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let first_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    range
        .rows()
        .map(|row| {
            let mut cells = vec![s!(); first_col];
            cells.extend(row.iter().map(cell_text));
            cells
        })
        .collect()
}

/// Display text of one cell. Whole numbers lose their `.0` so numeric IDs
/// read as "12", not "12.0".
pub fn cell_text(value: &Data) -> String {
    match value {
        Data::Empty => s!(),
        Data::String(v) => v.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => float_text(*v),
        Data::Bool(v) => if *v { s!("TRUE") } else { s!("FALSE") },
        Data::DateTime(v) => float_text(v.as_f64()),
        Data::DateTimeIso(v) => v.clone(),
        Data::DurationIso(v) => v.clone(),
        Data::Error(e) => e.to_string(),
    }
}

fn float_text(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_leading_columns_keep_absolute_positions() {
        // Used range B2:D3, column A empty throughout.
        let mut range: Range<Data> = Range::new((1, 1), (2, 3));
        range.set_value((1, 1), Data::String(s!("quantitative")));
        range.set_value((1, 3), Data::String(s!("Twin study")));
        range.set_value((2, 1), Data::String(s!("qualitative")));

        let rows = range_rows(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["", "quantitative", "", "Twin study"]);
        assert_eq!(rows[1], vec!["", "qualitative", "", ""]);
    }

    #[test]
    fn range_from_a1_is_unchanged() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::Float(7.0));
        range.set_value((0, 1), Data::String(s!("meta-analysis")));
        assert_eq!(range_rows(&range), vec![vec!["7", "meta-analysis"]]);
    }

    #[test]
    fn cell_text_variants() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String(s!("Genetics"))), "Genetics");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Float(12.0)), "12");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
    }
}
