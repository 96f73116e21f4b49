//! United States holiday catalog.

use feriae_core::errors::Result;
use feriae_time::{Month, Weekday};

use crate::entry::{CatalogEntry, YearRange};
use crate::provider::CatalogProvider;
use crate::rule::{DateRule, MonthDay, Ordinal};

/// Federal holidays of the United States.
///
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May, from 1971)
/// * Juneteenth National Independence Day (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25)
pub fn provider() -> Result<CatalogProvider> {
    let fixed = |m: Month, d: u8| DateRule::Fixed(MonthDay::new(m, d));
    let nth = |month: Month, weekday: Weekday, ordinal: Ordinal| DateRule::NthWeekday {
        month,
        weekday,
        ordinal,
    };
    CatalogProvider::new(
        "US",
        vec![
            CatalogEntry::new("New Year's Day", "public", fixed(Month::January, 1))
                .with_name("en", "New Year's Day"),
            CatalogEntry::new(
                "Martin Luther King Jr. Day",
                "public",
                nth(Month::January, Weekday::Monday, Ordinal::Nth(3)),
            )
            .with_name("en", "Martin Luther King Jr. Day")
            .with_validity(YearRange::from(1986)),
            CatalogEntry::new(
                "Washington's Birthday",
                "public",
                nth(Month::February, Weekday::Monday, Ordinal::Nth(3)),
            )
            .with_name("en", "Washington's Birthday")
            .with_validity(YearRange::from(1971)),
            CatalogEntry::new(
                "Memorial Day",
                "public",
                nth(Month::May, Weekday::Monday, Ordinal::Last),
            )
            .with_name("en", "Memorial Day")
            .with_validity(YearRange::from(1971)),
            CatalogEntry::new(
                "Juneteenth National Independence Day",
                "public",
                fixed(Month::June, 19),
            )
            .with_name("en", "Juneteenth National Independence Day")
            .with_validity(YearRange::from(2021)),
            CatalogEntry::new("Independence Day", "public", fixed(Month::July, 4))
                .with_name("en", "Independence Day"),
            CatalogEntry::new(
                "Labor Day",
                "public",
                nth(Month::September, Weekday::Monday, Ordinal::Nth(1)),
            )
            .with_name("en", "Labor Day"),
            CatalogEntry::new(
                "Columbus Day",
                "public",
                nth(Month::October, Weekday::Monday, Ordinal::Nth(2)),
            )
            .with_name("en", "Columbus Day"),
            CatalogEntry::new("Veterans Day", "public", fixed(Month::November, 11))
                .with_name("en", "Veterans Day"),
            CatalogEntry::new(
                "Thanksgiving Day",
                "public",
                nth(Month::November, Weekday::Thursday, Ordinal::Nth(4)),
            )
            .with_name("en", "Thanksgiving Day"),
            CatalogEntry::new("Christmas Day", "public", fixed(Month::December, 25))
                .with_name("en", "Christmas Day"),
        ],
    )
}
