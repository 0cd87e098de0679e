// src/model/method.rs
//
// Method taxonomy: six canonical categories, two families.
//
//   quantitative family = quantitative, meta-analysis, mixed-methods
//   qualitative family  = qualitative, meta-synthesis, mixed-methods
//
// mixed-methods is the only category in both families.

use std::fmt;

/// Canonical research method of a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Quantitative,
    Qualitative,
    MetaAnalysis,
    MetaSynthesis,
    MixedMethods,
    /// Empty or unrecognized source value.
    #[default]
    Unknown,
}

/// Every category, unknown last.
pub const ALL_METHODS: [Method; 6] = [
    Method::Quantitative,
    Method::Qualitative,
    Method::MetaAnalysis,
    Method::MetaSynthesis,
    Method::MixedMethods,
    Method::Unknown,
];

/// Which umbrella group(s) a method belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Quantitative,
    Qualitative,
    Both,
    None,
}

impl Family {
    pub fn is_quantitative(self) -> bool {
        matches!(self, Family::Quantitative | Family::Both)
    }

    pub fn is_qualitative(self) -> bool {
        matches!(self, Family::Qualitative | Family::Both)
    }
}

impl Method {
    /// Map a raw spreadsheet value to its category. Case and surrounding
    /// whitespace are ignored; anything else unrecognized is `Unknown`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "quantitative" => Method::Quantitative,
            "qualitative" => Method::Qualitative,
            "meta-analysis" => Method::MetaAnalysis,
            "meta-synthesis" => Method::MetaSynthesis,
            "mixed-methods" => Method::MixedMethods,
            _ => Method::Unknown,
        }
    }

    pub fn family(self) -> Family {
        match self {
            Method::Quantitative | Method::MetaAnalysis => Family::Quantitative,
            Method::Qualitative | Method::MetaSynthesis => Family::Qualitative,
            Method::MixedMethods => Family::Both,
            Method::Unknown => Family::None,
        }
    }

    /// Lowercase key as it appears in the source data ("" for unknown).
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Quantitative => "quantitative",
            Method::Qualitative => "qualitative",
            Method::MetaAnalysis => "meta-analysis",
            Method::MetaSynthesis => "meta-synthesis",
            Method::MixedMethods => "mixed-methods",
            Method::Unknown => "",
        }
    }

    /// Human label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Method::Quantitative => "Quantitative",
            Method::Qualitative => "Qualitative",
            Method::MetaAnalysis => "Meta-Analysis",
            Method::MetaSynthesis => "Meta-Synthesis",
            Method::MixedMethods => "Mixed-Methods",
            Method::Unknown => "Unknown",
        }
    }

    #[inline]
    pub fn is_known(self) -> bool { self != Method::Unknown }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-function form of [`Method::classify`].
pub fn classify(raw: &str) -> Method {
    Method::classify(raw)
}

/// Free-function form of [`Method::family`].
pub fn family_of(method: Method) -> Family {
    method.family()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_six_categories() {
        assert_eq!(classify("quantitative"), Method::Quantitative);
        assert_eq!(classify("qualitative"), Method::Qualitative);
        assert_eq!(classify("meta-analysis"), Method::MetaAnalysis);
        assert_eq!(classify("meta-synthesis"), Method::MetaSynthesis);
        assert_eq!(classify("mixed-methods"), Method::MixedMethods);
        assert_eq!(classify(""), Method::Unknown);
    }

    #[test]
    fn classify_ignores_case_and_padding() {
        assert_eq!(classify("  Meta-Analysis "), Method::MetaAnalysis);
        assert_eq!(classify("QUALITATIVE"), Method::Qualitative);
        assert_eq!(classify("\tMixed-Methods\n"), Method::MixedMethods);
    }

    #[test]
    fn unrecognized_values_are_unknown() {
        assert_eq!(classify("survey"), Method::Unknown);
        assert_eq!(classify("mixed"), Method::Unknown);
        assert_eq!(classify("   "), Method::Unknown);
    }

    #[test]
    fn families() {
        assert_eq!(family_of(Method::Quantitative), Family::Quantitative);
        assert_eq!(family_of(Method::MetaAnalysis), Family::Quantitative);
        assert_eq!(family_of(Method::Qualitative), Family::Qualitative);
        assert_eq!(family_of(Method::MetaSynthesis), Family::Qualitative);
        assert_eq!(family_of(Method::MixedMethods), Family::Both);
        assert_eq!(family_of(Method::Unknown), Family::None);
    }

    #[test]
    fn only_mixed_methods_is_in_both_families() {
        for m in ALL_METHODS {
            let both = m.family() == Family::Both;
            assert_eq!(both, m == Method::MixedMethods, "{m:?}");
            assert_eq!(
                m.family().is_quantitative() && m.family().is_qualitative(),
                both,
                "{m:?}"
            );
        }
    }

    #[test]
    fn as_str_round_trips_through_classify() {
        for m in ALL_METHODS {
            assert_eq!(classify(m.as_str()), m);
        }
    }
}
