//! Turkey holiday catalog.

use std::collections::BTreeMap;

use feriae_core::errors::Result;
use feriae_core::Year;
use feriae_time::Month;

use crate::entry::{CatalogEntry, YearRange};
use crate::provider::CatalogProvider;
use crate::rule::{DateRule, MonthDay};

/// National holidays of Turkey, plus the two religious feasts whose dates
/// follow the Islamic calendar.
///
/// * Yılbaşı (Jan 1)
/// * Ulusal Egemenlik ve Çocuk Bayramı (Apr 23)
/// * Emek ve Dayanışma Günü (May 1, from 2009)
/// * Atatürk'ü Anma, Gençlik ve Spor Bayramı (May 19)
/// * Demokrasi ve Millî Birlik Günü (Jul 15, from 2017)
/// * Zafer Bayramı (Aug 30)
/// * Cumhuriyet Bayramı (Oct 29)
/// * Ramazan Bayramı (tabulated 2020–2030)
/// * Kurban Bayramı (tabulated 2020–2030)
///
/// The Islamic-calendar feasts are a per-year lookup table; outside the
/// tabulated range the provider falls back to a fixed civil-calendar
/// approximation and marks the record approximate.
pub fn provider() -> Result<CatalogProvider> {
    let fixed = |m: Month, d: u8| DateRule::Fixed(MonthDay::new(m, d));
    CatalogProvider::new(
        "TR",
        vec![
            CatalogEntry::new("Yılbaşı", "public", fixed(Month::January, 1))
                .with_name("tr", "Yılbaşı")
                .with_name("en", "New Year's Day"),
            CatalogEntry::new(
                "Ulusal Egemenlik ve Çocuk Bayramı",
                "public",
                fixed(Month::April, 23),
            )
            .with_name("tr", "Ulusal Egemenlik ve Çocuk Bayramı")
            .with_name("en", "National Sovereignty and Children's Day"),
            CatalogEntry::new("Emek ve Dayanışma Günü", "public", fixed(Month::May, 1))
                .with_name("tr", "Emek ve Dayanışma Günü")
                .with_name("en", "Labour and Solidarity Day")
                .with_validity(YearRange::from(2009)),
            CatalogEntry::new(
                "Atatürk'ü Anma, Gençlik ve Spor Bayramı",
                "public",
                fixed(Month::May, 19),
            )
            .with_name("tr", "Atatürk'ü Anma, Gençlik ve Spor Bayramı")
            .with_name("en", "Commemoration of Atatürk, Youth and Sports Day"),
            CatalogEntry::new(
                "Demokrasi ve Millî Birlik Günü",
                "public",
                fixed(Month::July, 15),
            )
            .with_name("tr", "Demokrasi ve Millî Birlik Günü")
            .with_name("en", "Democracy and National Unity Day")
            .with_validity(YearRange::from(2017)),
            CatalogEntry::new("Zafer Bayramı", "public", fixed(Month::August, 30))
                .with_name("tr", "Zafer Bayramı")
                .with_name("en", "Victory Day"),
            CatalogEntry::new("Cumhuriyet Bayramı", "public", fixed(Month::October, 29))
                .with_name("tr", "Cumhuriyet Bayramı")
                .with_name("en", "Republic Day"),
            CatalogEntry::new(
                "Ramazan Bayramı",
                "religious",
                DateRule::Lookup {
                    table: eid_al_fitr_table(),
                    fallback: MonthDay::new(Month::April, 10),
                },
            )
            .with_name("tr", "Ramazan Bayramı")
            .with_name("en", "Eid al-Fitr"),
            CatalogEntry::new(
                "Kurban Bayramı",
                "religious",
                DateRule::Lookup {
                    table: eid_al_adha_table(),
                    fallback: MonthDay::new(Month::June, 16),
                },
            )
            .with_name("tr", "Kurban Bayramı")
            .with_name("en", "Eid al-Adha"),
        ],
    )
}

/// First day of Ramazan Bayramı (Eid al-Fitr), Gregorian civil dates.
fn eid_al_fitr_table() -> BTreeMap<Year, MonthDay> {
    BTreeMap::from([
        (2020, MonthDay::new(Month::May, 24)),
        (2021, MonthDay::new(Month::May, 13)),
        (2022, MonthDay::new(Month::May, 2)),
        (2023, MonthDay::new(Month::April, 21)),
        (2024, MonthDay::new(Month::April, 10)),
        (2025, MonthDay::new(Month::March, 30)),
        (2026, MonthDay::new(Month::March, 20)),
        (2027, MonthDay::new(Month::March, 9)),
        (2028, MonthDay::new(Month::February, 26)),
        (2029, MonthDay::new(Month::February, 14)),
        (2030, MonthDay::new(Month::February, 5)),
    ])
}

/// First day of Kurban Bayramı (Eid al-Adha), Gregorian civil dates.
fn eid_al_adha_table() -> BTreeMap<Year, MonthDay> {
    BTreeMap::from([
        (2020, MonthDay::new(Month::July, 31)),
        (2021, MonthDay::new(Month::July, 20)),
        (2022, MonthDay::new(Month::July, 9)),
        (2023, MonthDay::new(Month::June, 28)),
        (2024, MonthDay::new(Month::June, 16)),
        (2025, MonthDay::new(Month::June, 6)),
        (2026, MonthDay::new(Month::May, 27)),
        (2027, MonthDay::new(Month::May, 16)),
        (2028, MonthDay::new(Month::May, 5)),
        (2029, MonthDay::new(Month::April, 24)),
        (2030, MonthDay::new(Month::April, 13)),
    ])
}
