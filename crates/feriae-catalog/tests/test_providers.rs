//! Integration tests for catalog-driven providers.
//!
//! These exercise the documented provider contract: evaluation order and
//! silent overwrite on date collisions, validity gating, observed-date
//! shifts, the lookup-table fallback, and the purity of `load_holidays`.

use feriae_catalog::{
    CatalogEntry, CatalogProvider, DateRule, HolidayProvider, MonthDay, Ordinal, YearRange,
};
use feriae_core::errors::Error;
use feriae_time::{Date, Month, ObservedPolicy, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn fixed(month: Month, day: u8) -> DateRule {
    DateRule::Fixed(MonthDay::new(month, day))
}

#[test]
fn year_gated_entry_supersedes_baseline() {
    // The pattern catalog authors rely on: a baseline entry, overwritten in
    // one year by a special observance on the same date.
    let provider = CatalogProvider::new(
        "XX",
        vec![
            CatalogEntry::new("National Day", "public", fixed(Month::June, 5)),
            CatalogEntry::new("National Day (centenary)", "public", fixed(Month::June, 5))
                .with_validity(YearRange::between(2030, 2030)),
        ],
    )
    .unwrap();

    let ordinary = provider.load_holidays(2029).unwrap();
    assert_eq!(ordinary[&date(2029, 6, 5)].canonical_name, "National Day");

    let centenary = provider.load_holidays(2030).unwrap();
    assert_eq!(centenary.len(), 1);
    assert_eq!(
        centenary[&date(2030, 6, 5)].canonical_name,
        "National Day (centenary)"
    );
}

#[test]
fn observed_shift_can_merge_two_holidays() {
    // 2021: Dec 25 is a Saturday and Dec 26 a Sunday. Under ToMonday both
    // shift to Monday Dec 27, and the later catalog entry wins the slot.
    let provider = CatalogProvider::new(
        "XX",
        vec![
            CatalogEntry::new("Christmas Day", "public", fixed(Month::December, 25))
                .with_observed(ObservedPolicy::ToMonday),
            CatalogEntry::new("Boxing Day", "public", fixed(Month::December, 26))
                .with_observed(ObservedPolicy::ToMonday),
        ],
    )
    .unwrap();

    let holidays = provider.load_holidays(2021).unwrap();
    assert_eq!(holidays.len(), 1);
    let survivor = &holidays[&date(2021, 12, 27)];
    assert_eq!(survivor.canonical_name, "Boxing Day");
    assert!(survivor.observed);

    // 2019: Dec 25 Wednesday, Dec 26 Thursday — both shift back to Monday
    // Dec 23, same collision, Boxing Day wins again.
    let holidays = provider.load_holidays(2019).unwrap();
    assert_eq!(holidays.len(), 1);
    assert!(holidays.contains_key(&date(2019, 12, 23)));
}

#[test]
fn nominal_date_absent_after_shift() {
    let provider = CatalogProvider::new(
        "XX",
        vec![
            CatalogEntry::new("May Day", "public", fixed(Month::May, 1))
                .with_observed(ObservedPolicy::ToMonday),
        ],
    )
    .unwrap();

    // 2021-05-01 is a Saturday; observed Monday May 3.
    let holidays = provider.load_holidays(2021).unwrap();
    assert!(!holidays.contains_key(&date(2021, 5, 1)));
    let h = &holidays[&date(2021, 5, 3)];
    assert!(h.observed);

    // 2023-05-01 is a Monday; nothing moves, nothing is flagged.
    let holidays = provider.load_holidays(2023).unwrap();
    let h = &holidays[&date(2023, 5, 1)];
    assert!(!h.observed);
}

#[test]
fn ordinal_and_last_weekday_rules() {
    let provider = CatalogProvider::new(
        "XX",
        vec![
            CatalogEntry::new(
                "Third Monday",
                "public",
                DateRule::NthWeekday {
                    month: Month::January,
                    weekday: Weekday::Monday,
                    ordinal: Ordinal::Nth(3),
                },
            ),
            CatalogEntry::new(
                "Last Monday",
                "public",
                DateRule::NthWeekday {
                    month: Month::May,
                    weekday: Weekday::Monday,
                    ordinal: Ordinal::Last,
                },
            ),
        ],
    )
    .unwrap();

    let holidays = provider.load_holidays(2024).unwrap();
    assert!(holidays.contains_key(&date(2024, 1, 15)));
    assert!(holidays.contains_key(&date(2024, 5, 27)));
}

#[test]
fn lookup_rule_contract() {
    let provider = CatalogProvider::new(
        "XX",
        vec![CatalogEntry::new(
            "Lunar Feast",
            "religious",
            DateRule::Lookup {
                table: [(2024, MonthDay::new(Month::April, 10))].into_iter().collect(),
                fallback: MonthDay::new(Month::April, 1),
            },
        )],
    )
    .unwrap();

    // Tabulated year: verbatim, exact.
    let tabulated = provider.load_holidays(2024).unwrap();
    let h = &tabulated[&date(2024, 4, 10)];
    assert!(!h.approximate);

    // Out-of-table year: fallback, marked approximate.
    let estimated = provider.load_holidays(2025).unwrap();
    let h = &estimated[&date(2025, 4, 1)];
    assert!(h.approximate);
}

#[test]
fn catalog_load_failures() {
    let bad_day = vec![CatalogEntry::new(
        "Nonexistent",
        "public",
        fixed(Month::April, 31),
    )];
    assert!(matches!(
        CatalogProvider::new("XX", bad_day),
        Err(Error::Catalog(_))
    ));

    let zero_ordinal = vec![CatalogEntry::new(
        "Zeroth Monday",
        "public",
        DateRule::NthWeekday {
            month: Month::May,
            weekday: Weekday::Monday,
            ordinal: Ordinal::Nth(0),
        },
    )];
    assert!(matches!(
        CatalogProvider::new("XX", zero_ordinal),
        Err(Error::Catalog(_))
    ));

    let empty_table = vec![CatalogEntry::new(
        "Lunar Feast",
        "religious",
        DateRule::Lookup {
            table: std::collections::BTreeMap::new(),
            fallback: MonthDay::new(Month::April, 1),
        },
    )];
    assert!(matches!(
        CatalogProvider::new("XX", empty_table),
        Err(Error::Catalog(_))
    ));
}

#[test]
fn records_are_reproducible_and_independent() {
    let provider = CatalogProvider::new(
        "XX",
        vec![CatalogEntry::new("New Year", "public", fixed(Month::January, 1))],
    )
    .unwrap();
    let a = provider.load_holidays(2024).unwrap();
    let b = provider.load_holidays(2024).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_loads_need_no_synchronization() {
    let provider = CatalogProvider::new(
        "XX",
        vec![
            CatalogEntry::new("Good Friday", "religious", DateRule::EasterOffset { days: -2 }),
            CatalogEntry::new("New Year", "public", fixed(Month::January, 1)),
        ],
    )
    .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (2020..2032)
            .map(|year| {
                let provider = &provider;
                scope.spawn(move || provider.load_holidays(year).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 2);
        }
    });
}

proptest! {
    #[test]
    fn load_holidays_is_deterministic(year in 1900i32..=2199) {
        let us = feriae_catalog::countries::united_states::provider().unwrap();
        prop_assert_eq!(
            us.load_holidays(year).unwrap(),
            us.load_holidays(year).unwrap()
        );
    }
}

#[test]
fn builtin_catalogs_stay_within_the_requested_year() {
    let providers: Vec<CatalogProvider> = vec![
        feriae_catalog::countries::germany::provider().unwrap(),
        feriae_catalog::countries::greece::provider().unwrap(),
        feriae_catalog::countries::turkey::provider().unwrap(),
        feriae_catalog::countries::united_states::provider().unwrap(),
    ];
    for provider in &providers {
        for year in 1990..=2040 {
            let holidays = provider.load_holidays(year).unwrap();
            assert!(!holidays.is_empty(), "{} {year}", provider.country_code());
            for (key, h) in &holidays {
                assert_eq!(*key, h.date, "map key must equal record date");
                assert_eq!(h.date.year(), year, "{} {year}", provider.country_code());
            }
        }
    }
}
