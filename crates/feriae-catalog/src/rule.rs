//! Declarative date rules.
//!
//! A `DateRule` is the computation half of a catalog entry: given a year, it
//! produces a concrete civil date by delegating to the date-rule engine in
//! `feriae-time`. Rules are validated once, when a provider is built, so that
//! malformed catalog data fails fast instead of surfacing mid-computation.

use std::collections::BTreeMap;

use feriae_core::errors::{Error, Result};
use feriae_core::Year;
use feriae_time::{gregorian_easter, orthodox_easter, Date, Month, Weekday};

/// A month/day pair with no year attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthDay {
    /// Month of the year.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
}

impl MonthDay {
    /// Create a month/day pair. Validity is checked by
    /// [`DateRule::validate`], not here, so catalog data can stay `const`.
    pub const fn new(month: Month, day: u8) -> Self {
        MonthDay { month, day }
    }

    /// Attach a year, producing a concrete date.
    pub fn resolve(&self, year: Year) -> Result<Date> {
        Date::from_ymd(year, self.month.number(), self.day)
    }

    /// Check that the pair resolves in *every* year. February 29 is rejected:
    /// a rule that only exists in leap years is malformed catalog data.
    fn validate_any_year(&self) -> Result<()> {
        let max = match self.month {
            Month::February => 28,
            m => m.max_length(),
        };
        if self.day == 0 || self.day > max {
            return Err(Error::Catalog(format!(
                "day {} out of range [1, {max}] for {}",
                self.day, self.month
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.day)
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ordinal {
    /// The n-th occurrence, counting from 1.
    Nth(u8),
    /// The last occurrence.
    Last,
}

/// The date a rule resolved to, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    /// The nominal civil date.
    pub date: Date,
    /// True if the date came from a lookup-table fallback rather than a
    /// tabulated or computed value.
    pub approximate: bool,
}

/// How a catalog entry's date is computed for a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateRule {
    /// The same month/day every year.
    Fixed(MonthDay),

    /// A fixed number of days relative to Gregorian (Western) Easter Sunday.
    /// Negative is before Easter: Good Friday is −2, Whit Monday +50.
    EasterOffset {
        /// Signed day offset from Easter Sunday.
        days: i32,
    },

    /// A fixed number of days relative to Orthodox Easter Sunday (expressed
    /// as a Gregorian civil date).
    OrthodoxEasterOffset {
        /// Signed day offset from Orthodox Easter Sunday.
        days: i32,
    },

    /// The n-th (or last) occurrence of a weekday in a month, e.g.
    /// "3rd Monday of January" or "last Monday of May".
    NthWeekday {
        /// Month of the year.
        month: Month,
        /// Weekday to look for.
        weekday: Weekday,
        /// Which occurrence.
        ordinal: Ordinal,
    },

    /// A per-year date table for calendars this kernel does not compute
    /// (Hijri, Hebrew, lunisolar). Years present in the table resolve
    /// verbatim; all other years use the fixed fallback and the result is
    /// marked approximate.
    Lookup {
        /// Tabulated civil dates keyed by year.
        table: BTreeMap<Year, MonthDay>,
        /// Civil-calendar approximation used outside the tabulated range.
        fallback: MonthDay,
    },
}

impl DateRule {
    /// Fail-fast structural check, run when a provider is built.
    pub fn validate(&self) -> Result<()> {
        match self {
            DateRule::Fixed(md) => md.validate_any_year(),
            DateRule::EasterOffset { .. } | DateRule::OrthodoxEasterOffset { .. } => Ok(()),
            DateRule::NthWeekday { ordinal, .. } => match ordinal {
                Ordinal::Nth(0) => {
                    Err(Error::Catalog("weekday ordinal must be >= 1".into()))
                }
                Ordinal::Nth(n) if *n > 5 => Err(Error::Catalog(format!(
                    "no month has a {n}-th occurrence of a weekday"
                ))),
                _ => Ok(()),
            },
            DateRule::Lookup { table, fallback } => {
                if table.is_empty() {
                    return Err(Error::Catalog("empty lookup table".into()));
                }
                for (year, md) in table {
                    md.resolve(*year).map_err(|e| {
                        Error::Catalog(format!("lookup entry for {year}: {e}"))
                    })?;
                }
                fallback.validate_any_year()
            }
        }
    }

    /// Resolve the rule for a year.
    ///
    /// For validated rules and in-range years this only fails when an
    /// Easter offset or an n-th-weekday request leaves the civil range or the
    /// month, which is surfaced as an [`Error::Date`].
    pub fn resolve(&self, year: Year) -> Result<ResolvedDate> {
        let exact = |date: Date| ResolvedDate {
            date,
            approximate: false,
        };
        match self {
            DateRule::Fixed(md) => Ok(exact(md.resolve(year)?)),
            DateRule::EasterOffset { days } => {
                Ok(exact(gregorian_easter(year)?.add_days(*days)?))
            }
            DateRule::OrthodoxEasterOffset { days } => {
                Ok(exact(orthodox_easter(year)?.add_days(*days)?))
            }
            DateRule::NthWeekday {
                month,
                weekday,
                ordinal,
            } => {
                let date = match ordinal {
                    Ordinal::Nth(n) => Date::nth_weekday(*n, *weekday, year, month.number())?,
                    Ordinal::Last => Date::last_weekday(*weekday, year, month.number())?,
                };
                Ok(exact(date))
            }
            DateRule::Lookup { table, fallback } => match table.get(&year) {
                Some(md) => Ok(exact(md.resolve(year)?)),
                None => Ok(ResolvedDate {
                    date: fallback.resolve(year)?,
                    approximate: true,
                }),
            },
        }
    }
}
