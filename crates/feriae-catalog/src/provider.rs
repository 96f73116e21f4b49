//! Per-country providers.
//!
//! A provider turns a catalog and a year into a date-keyed collection of
//! [`Holiday`] records. The computation is purely functional: `&self` methods
//! over immutable catalog data, a fresh output collection per call, no
//! caching. Concurrent calls for different years or countries need no
//! synchronization.

use std::collections::{BTreeMap, BTreeSet};

use feriae_core::errors::{Error, Result};
use feriae_core::{ensure, Year};
use feriae_time::date::{MAX_YEAR, MIN_YEAR};
use feriae_time::Date;

use crate::entry::CatalogEntry;
use crate::holiday::Holiday;

/// The per-country query surface.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// ISO 3166-1 alpha-2 country code (e.g. `"DE"`).
    fn country_code(&self) -> &str;

    /// Subdivision codes any catalog entry is scoped to.
    fn supported_subdivisions(&self) -> &BTreeSet<String>;

    /// Category tags the catalog uses.
    fn supported_categories(&self) -> &BTreeSet<String>;

    /// Compute all holidays for `year`, keyed by date.
    ///
    /// Fails immediately on a year outside the supported civil range; it
    /// never returns a partial collection.
    fn load_holidays(&self, year: Year) -> Result<BTreeMap<Date, Holiday>>;

    /// Holidays for `year` restricted to the given subdivisions. Nationwide
    /// records always pass the filter.
    fn filter_by_subdivision(
        &self,
        year: Year,
        subdivisions: &[&str],
    ) -> Result<BTreeMap<Date, Holiday>> {
        Ok(self
            .load_holidays(year)?
            .into_iter()
            .filter(|(_, h)| h.applies_to(subdivisions))
            .collect())
    }

    /// Holidays for `year` restricted to one category tag.
    fn filter_by_category(&self, year: Year, category: &str) -> Result<BTreeMap<Date, Holiday>> {
        Ok(self
            .load_holidays(year)?
            .into_iter()
            .filter(|(_, h)| h.category == category)
            .collect())
    }

    /// Whether any holiday falls on `date`.
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.load_holidays(date.year())?.contains_key(&date))
    }

    /// The holiday on `date`, if any.
    fn holiday_on(&self, date: Date) -> Result<Option<Holiday>> {
        Ok(self.load_holidays(date.year())?.remove(&date))
    }
}

/// A provider driven entirely by catalog data.
///
/// One generic type serves every country; the differences live in the data,
/// not in per-country code.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    country: String,
    subdivisions: BTreeSet<String>,
    categories: BTreeSet<String>,
    entries: Vec<CatalogEntry>,
}

impl CatalogProvider {
    /// Build a provider from an ordered catalog.
    ///
    /// Every entry's rule is validated here so that malformed catalog data
    /// fails at load time. The supported subdivision and category sets are
    /// derived from the entries.
    pub fn new(country: &str, entries: Vec<CatalogEntry>) -> Result<Self> {
        ensure!(!country.is_empty(), "country code must not be empty");
        ensure!(!entries.is_empty(), "catalog for {country} is empty");
        for entry in &entries {
            entry.rule.validate().map_err(|e| {
                Error::Catalog(format!("{country}: {}: {e}", entry.canonical_name))
            })?;
        }
        let subdivisions = entries
            .iter()
            .flat_map(|e| e.subdivisions.iter().cloned())
            .collect();
        let categories = entries.iter().map(|e| e.category.clone()).collect();
        Ok(CatalogProvider {
            country: country.to_owned(),
            subdivisions,
            categories,
            entries,
        })
    }

    /// The ordered catalog backing this provider.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl HolidayProvider for CatalogProvider {
    fn country_code(&self) -> &str {
        &self.country
    }

    fn supported_subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    fn supported_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    fn load_holidays(&self, year: Year) -> Result<BTreeMap<Date, Holiday>> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::InvalidArgument(format!(
                "year {year} outside supported range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let mut holidays = BTreeMap::new();
        for entry in &self.entries {
            if !entry.validity.contains(year) {
                continue;
            }
            let resolved = entry.rule.resolve(year)?;
            let date = entry.observed.apply(resolved.date);
            // Catalog order decides collisions: the later entry wins.
            holidays.insert(
                date,
                Holiday {
                    date,
                    canonical_name: entry.canonical_name.clone(),
                    localized_names: entry.localized_names.clone(),
                    category: entry.category.clone(),
                    subdivision_scope: entry.subdivisions.clone(),
                    observed: date != resolved.date,
                    approximate: resolved.approximate,
                },
            );
        }
        Ok(holidays)
    }
}
