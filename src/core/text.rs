// src/core/text.rs
//
// Small string normalizers shared by the record model and the filters.

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true; // swallows leading whitespace
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    if out.ends_with(' ') { out.pop(); }
    out
}

/// Canonical comparison key: whitespace-normalized and lowercased.
pub fn fold_key(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Upper-case the first letter of every space/hyphen separated word,
/// lower-case the rest. "public HEALTH" -> "Public Health".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = ch.is_whitespace() || ch == '-' || ch == '/' || ch == '(';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  health \t psychology \n"), "health psychology");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn fold_key_lowercases() {
        assert_eq!(fold_key(" Public  HEALTH "), "public health");
    }

    #[test]
    fn title_case_words_and_hyphens() {
        assert_eq!(title_case("public health"), "Public Health");
        assert_eq!(title_case("meta-analysis"), "Meta-Analysis");
        assert_eq!(title_case("HEALTH psychology"), "Health Psychology");
        assert_eq!(title_case("work/organisational (i/o)"), "Work/Organisational (I/O)");
    }
}
