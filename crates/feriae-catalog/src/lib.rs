//! # feriae-catalog
//!
//! The holiday data model and its orchestration: `Holiday` records, the
//! declarative `DateRule` / `CatalogEntry` catalog format, the per-country
//! `CatalogProvider`, and the country `Registry`.
//!
//! A catalog is an ordered list of entries. Order matters: when two entries
//! resolve to the same date for a year, the later entry overwrites the
//! earlier one in the output. Catalog authors rely on this to let year-gated
//! special observances supersede a baseline entry.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bundled country catalogs.
pub mod countries;

/// `CatalogEntry` and validity ranges.
pub mod entry;

/// The `Holiday` record.
pub mod holiday;

/// `HolidayProvider` trait and the catalog-driven implementation.
pub mod provider;

/// `Registry` — look up providers by country code.
pub mod registry;

/// Declarative date rules.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use entry::{CatalogEntry, YearRange};
pub use holiday::Holiday;
pub use provider::{CatalogProvider, HolidayProvider};
pub use registry::Registry;
pub use rule::{DateRule, MonthDay, Ordinal, ResolvedDate};
