//! The `Holiday` record — the sole domain entity this library produces.

use std::collections::{BTreeMap, BTreeSet};

use feriae_time::Date;

/// One observance on one concrete calendar date.
///
/// Records are value objects: produced fresh on every
/// [`load_holidays`](crate::provider::HolidayProvider::load_holidays) call,
/// never mutated afterwards, compared field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The civil date the observance falls on (already weekend-adjusted when
    /// the catalog entry carries an observed-date policy).
    pub date: Date,

    /// The label in the catalog's designated primary language.
    pub canonical_name: String,

    /// Labels keyed by language code. The catalog data contract expects at
    /// minimum the primary language and English; the kernel does not enforce
    /// this.
    pub localized_names: BTreeMap<String, String>,

    /// Category tag from the country's own closed set (e.g. `"public"`,
    /// `"religious"`, `"regional"`). Set membership is a catalog data-quality
    /// concern, not a kernel invariant.
    pub category: String,

    /// Subdivision codes this record applies to. Empty means nationwide.
    pub subdivision_scope: BTreeSet<String>,

    /// True if `date` is an adjusted (observed) date rather than the nominal
    /// one.
    pub observed: bool,

    /// True if `date` came from a lookup-table fallback rather than a
    /// tabulated or computed value.
    pub approximate: bool,
}

impl Holiday {
    /// Whether this record applies in any of the given subdivisions.
    ///
    /// A nationwide record (empty scope) applies everywhere, including to an
    /// empty query.
    pub fn applies_to(&self, subdivisions: &[&str]) -> bool {
        self.subdivision_scope.is_empty()
            || subdivisions
                .iter()
                .any(|s| self.subdivision_scope.contains(*s))
    }

    /// Whether this record applies nationwide.
    pub fn is_nationwide(&self) -> bool {
        self.subdivision_scope.is_empty()
    }

    /// The label for a language code, if the catalog supplied one.
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.localized_names.get(language).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scope: &[&str]) -> Holiday {
        Holiday {
            date: Date::from_ymd(2024, 10, 3).unwrap(),
            canonical_name: "Tag der Deutschen Einheit".into(),
            localized_names: BTreeMap::from([
                ("de".into(), "Tag der Deutschen Einheit".into()),
                ("en".into(), "German Unity Day".into()),
            ]),
            category: "public".into(),
            subdivision_scope: scope.iter().map(|s| s.to_string()).collect(),
            observed: false,
            approximate: false,
        }
    }

    #[test]
    fn nationwide_applies_everywhere() {
        let h = sample(&[]);
        assert!(h.is_nationwide());
        assert!(h.applies_to(&[]));
        assert!(h.applies_to(&["BY"]));
    }

    #[test]
    fn scoped_requires_intersection() {
        let h = sample(&["BY", "SL"]);
        assert!(h.applies_to(&["BY"]));
        assert!(h.applies_to(&["NW", "SL"]));
        assert!(!h.applies_to(&["NW"]));
        assert!(!h.applies_to(&[]));
    }

    #[test]
    fn localized_lookup() {
        let h = sample(&[]);
        assert_eq!(h.name_in("en"), Some("German Unity Day"));
        assert_eq!(h.name_in("fr"), None);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(sample(&["BY"]), sample(&["BY"]));
        assert_ne!(sample(&["BY"]), sample(&["NW"]));
    }
}
