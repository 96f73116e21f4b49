//! Integration tests for the Easter kernels and Easter-relative offsets.
//!
//! The offset table below is the independent reference required for movable
//! feasts: Good Friday, Easter Monday, and the Whitsun/Corpus Christi chain
//! must all stay consistent with Easter Sunday across leap years and the
//! non-leap 2100 century boundary.

use feriae_time::{gregorian_easter, orthodox_easter, Date, ObservedPolicy, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Western Easter Sunday reference, spanning leap/non-leap years and both
/// sides of 2100.
const GREGORIAN_REFERENCE: [(i32, u8, u8); 12] = [
    (1900, 4, 15),
    (1964, 3, 29),
    (2000, 4, 23),
    (2008, 3, 23),
    (2016, 3, 27),
    (2020, 4, 12),
    (2023, 4, 9),
    (2024, 3, 31),
    (2025, 4, 20),
    (2026, 4, 5),
    (2038, 4, 25),
    (2100, 3, 28),
];

#[test]
fn western_movable_feast_offsets() {
    for (y, m, d) in GREGORIAN_REFERENCE {
        let easter = date(y, m, d);
        assert_eq!(gregorian_easter(y).unwrap(), easter, "Easter {y}");

        // Each named feast is a fixed offset from Easter Sunday.
        let good_friday = easter - 2;
        let easter_monday = easter + 1;
        let ascension = easter + 39;
        let whit_monday = easter + 50;
        let corpus_christi = easter + 60;
        let ash_wednesday = easter - 46;

        assert_eq!(good_friday.weekday(), Weekday::Friday, "{y}");
        assert_eq!(easter_monday.weekday(), Weekday::Monday, "{y}");
        assert_eq!(ascension.weekday(), Weekday::Thursday, "{y}");
        assert_eq!(whit_monday.weekday(), Weekday::Monday, "{y}");
        assert_eq!(corpus_christi.weekday(), Weekday::Thursday, "{y}");
        assert_eq!(ash_wednesday.weekday(), Weekday::Wednesday, "{y}");
    }
}

#[test]
fn good_friday_2024_crosses_month_boundary() {
    // Easter 2024-03-31: Good Friday lands in March, Easter Monday in April.
    let easter = gregorian_easter(2024).unwrap();
    assert_eq!(easter - 2, date(2024, 3, 29));
    assert_eq!(easter + 1, date(2024, 4, 1));
}

#[test]
fn orthodox_reference_dates() {
    let reference = [
        (2010, 4, 4),
        (2016, 5, 1),
        (2019, 4, 28),
        (2020, 4, 19),
        (2021, 5, 2),
        (2022, 4, 24),
        (2023, 4, 16),
        (2024, 5, 5),
        (2025, 4, 20),
    ];
    for (y, m, d) in reference {
        assert_eq!(orthodox_easter(y).unwrap(), date(y, m, d), "Orthodox Easter {y}");
    }
}

#[test]
fn orthodox_never_before_western() {
    // The Julian computus never anticipates the Gregorian one.
    for year in 1900..=2199 {
        let western = gregorian_easter(year).unwrap();
        let orthodox = orthodox_easter(year).unwrap();
        assert!(orthodox >= western, "{year}: {orthodox} < {western}");
    }
}

proptest! {
    #[test]
    fn gregorian_easter_is_deterministic(year in 1900i32..=2199) {
        prop_assert_eq!(
            gregorian_easter(year).unwrap(),
            gregorian_easter(year).unwrap()
        );
    }

    #[test]
    fn orthodox_easter_is_deterministic(year in 1900i32..=2199) {
        prop_assert_eq!(
            orthodox_easter(year).unwrap(),
            orthodox_easter(year).unwrap()
        );
    }

    #[test]
    fn to_monday_shift_lands_on_monday(serial in 7i32..Date::MAX.serial() - 7) {
        let d = Date::from_serial(serial).unwrap();
        let shifted = ObservedPolicy::ToMonday.apply(d);
        prop_assert_eq!(shifted.weekday(), Weekday::Monday);
        // Idempotent: a second application is a no-op.
        prop_assert_eq!(ObservedPolicy::ToMonday.apply(shifted), shifted);
    }
}
