//! Country registry: providers keyed by ISO country code, plus
//! country-agnostic query helpers.

use std::collections::BTreeMap;

use feriae_core::errors::{Error, Result};
use feriae_core::Year;
use feriae_time::Date;

use crate::countries;
use crate::holiday::Holiday;
use crate::provider::HolidayProvider;

/// A lookup table of holiday providers.
#[derive(Debug, Default)]
pub struct Registry {
    providers: BTreeMap<String, Box<dyn HolidayProvider>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry preloaded with the bundled country catalogs.
    pub fn with_builtin() -> Result<Self> {
        let mut registry = Registry::new();
        registry.register(Box::new(countries::germany::provider()?));
        registry.register(Box::new(countries::greece::provider()?));
        registry.register(Box::new(countries::turkey::provider()?));
        registry.register(Box::new(countries::united_states::provider()?));
        Ok(registry)
    }

    /// Add (or replace) a provider under its own country code.
    pub fn register(&mut self, provider: Box<dyn HolidayProvider>) {
        self.providers
            .insert(provider.country_code().to_owned(), provider);
    }

    /// The provider for a country code, if registered.
    pub fn get(&self, country: &str) -> Option<&dyn HolidayProvider> {
        self.providers.get(country).map(|p| p.as_ref())
    }

    /// Registered country codes, sorted.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    fn provider(&self, country: &str) -> Result<&dyn HolidayProvider> {
        self.get(country)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown country code {country:?}")))
    }

    /// All holidays of a country for a year.
    pub fn holidays(&self, country: &str, year: Year) -> Result<BTreeMap<Date, Holiday>> {
        self.provider(country)?.load_holidays(year)
    }

    /// Holidays of a country for a year, restricted to subdivisions.
    pub fn by_subdivision(
        &self,
        country: &str,
        year: Year,
        subdivisions: &[&str],
    ) -> Result<BTreeMap<Date, Holiday>> {
        self.provider(country)?
            .filter_by_subdivision(year, subdivisions)
    }

    /// Holidays of a country for a year, restricted to one category.
    pub fn by_category(
        &self,
        country: &str,
        year: Year,
        category: &str,
    ) -> Result<BTreeMap<Date, Holiday>> {
        self.provider(country)?.filter_by_category(year, category)
    }

    /// Whether `date` is a holiday in `country`.
    pub fn is_holiday(&self, country: &str, date: Date) -> Result<bool> {
        self.provider(country)?.is_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_is_an_error() {
        let registry = Registry::new();
        assert!(matches!(
            registry.holidays("ZZ", 2024),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn builtin_codes_are_sorted() {
        let registry = Registry::with_builtin().unwrap();
        let codes: Vec<_> = registry.country_codes().collect();
        assert_eq!(codes, ["DE", "GR", "TR", "US"]);
    }
}
