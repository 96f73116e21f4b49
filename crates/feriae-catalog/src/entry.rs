//! Catalog entries: one declarative rule plus its descriptive template.

use std::collections::{BTreeMap, BTreeSet};

use feriae_core::Year;
use feriae_time::ObservedPolicy;

use crate::rule::DateRule;

/// An inclusive, optionally open-ended range of years an entry is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearRange {
    /// First year the entry applies, if bounded below.
    pub min: Option<Year>,
    /// Last year the entry applies, if bounded above.
    pub max: Option<Year>,
}

impl YearRange {
    /// Valid for every year.
    pub const fn open() -> Self {
        YearRange {
            min: None,
            max: None,
        }
    }

    /// Valid from `year` onward.
    pub const fn from(year: Year) -> Self {
        YearRange {
            min: Some(year),
            max: None,
        }
    }

    /// Valid up to and including `year`.
    pub const fn until(year: Year) -> Self {
        YearRange {
            min: None,
            max: Some(year),
        }
    }

    /// Valid for `min..=max`.
    pub const fn between(min: Year, max: Year) -> Self {
        YearRange {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether `year` falls inside the range.
    pub fn contains(&self, year: Year) -> bool {
        self.min.map_or(true, |min| year >= min) && self.max.map_or(true, |max| year <= max)
    }
}

/// One named observance in a country's catalog.
///
/// Entries are evaluated in catalog order; a later entry resolving to the
/// same date as an earlier one replaces it in the provider output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// How the date is computed.
    pub rule: DateRule,
    /// Years the entry applies to.
    pub validity: YearRange,
    /// Label in the catalog's primary language.
    pub canonical_name: String,
    /// Labels keyed by language code.
    pub localized_names: BTreeMap<String, String>,
    /// Category tag from the country's closed set.
    pub category: String,
    /// Subdivision codes the entry is scoped to; empty means nationwide.
    pub subdivisions: BTreeSet<String>,
    /// Weekend-adjustment policy applied to the resolved date.
    pub observed: ObservedPolicy,
}

impl CatalogEntry {
    /// Create an entry with an open validity range, nationwide scope, and no
    /// weekend adjustment. The canonical name doubles as the primary-language
    /// localized name once a language is registered via
    /// [`with_name`](Self::with_name).
    pub fn new(canonical_name: &str, category: &str, rule: DateRule) -> Self {
        CatalogEntry {
            rule,
            validity: YearRange::open(),
            canonical_name: canonical_name.to_owned(),
            localized_names: BTreeMap::new(),
            category: category.to_owned(),
            subdivisions: BTreeSet::new(),
            observed: ObservedPolicy::Unadjusted,
        }
    }

    /// Add a localized label.
    pub fn with_name(mut self, language: &str, label: &str) -> Self {
        self.localized_names
            .insert(language.to_owned(), label.to_owned());
        self
    }

    /// Restrict the validity range.
    pub fn with_validity(mut self, validity: YearRange) -> Self {
        self.validity = validity;
        self
    }

    /// Scope the entry to the given subdivisions.
    pub fn with_subdivisions<I, S>(mut self, subdivisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdivisions = subdivisions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the weekend-adjustment policy.
    pub fn with_observed(mut self, policy: ObservedPolicy) -> Self {
        self.observed = policy;
        self
    }
}
