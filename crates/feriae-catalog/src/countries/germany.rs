//! Germany holiday catalog.

use feriae_core::errors::Result;
use feriae_time::Month;

use crate::entry::{CatalogEntry, YearRange};
use crate::provider::CatalogProvider;
use crate::rule::{DateRule, MonthDay};

/// Nationwide and regional holidays of Germany.
///
/// * Neujahr (Jan 1)
/// * Karfreitag (Easter −2)
/// * Ostermontag (Easter +1)
/// * Tag der Arbeit (May 1)
/// * Christi Himmelfahrt (Easter +39)
/// * Pfingstmontag (Easter +50)
/// * Fronleichnam (Easter +60; BW, BY, HE, NW, RP, SL)
/// * Mariä Himmelfahrt (Aug 15; BY, SL)
/// * Tag der Deutschen Einheit (Oct 3, from 1990)
/// * Reformationstag (Oct 31; BB, MV, SN, ST, TH)
/// * Erster Weihnachtstag (Dec 25)
/// * Zweiter Weihnachtstag (Dec 26)
pub fn provider() -> Result<CatalogProvider> {
    let fixed = |m: Month, d: u8| DateRule::Fixed(MonthDay::new(m, d));
    let easter = |days: i32| DateRule::EasterOffset { days };
    CatalogProvider::new(
        "DE",
        vec![
            CatalogEntry::new("Neujahr", "public", fixed(Month::January, 1))
                .with_name("de", "Neujahr")
                .with_name("en", "New Year's Day"),
            CatalogEntry::new("Karfreitag", "public", easter(-2))
                .with_name("de", "Karfreitag")
                .with_name("en", "Good Friday"),
            CatalogEntry::new("Ostermontag", "public", easter(1))
                .with_name("de", "Ostermontag")
                .with_name("en", "Easter Monday"),
            CatalogEntry::new("Tag der Arbeit", "public", fixed(Month::May, 1))
                .with_name("de", "Tag der Arbeit")
                .with_name("en", "Labour Day"),
            CatalogEntry::new("Christi Himmelfahrt", "public", easter(39))
                .with_name("de", "Christi Himmelfahrt")
                .with_name("en", "Ascension Day"),
            CatalogEntry::new("Pfingstmontag", "public", easter(50))
                .with_name("de", "Pfingstmontag")
                .with_name("en", "Whit Monday"),
            CatalogEntry::new("Fronleichnam", "regional", easter(60))
                .with_name("de", "Fronleichnam")
                .with_name("en", "Corpus Christi")
                .with_subdivisions(["BW", "BY", "HE", "NW", "RP", "SL"]),
            CatalogEntry::new("Mariä Himmelfahrt", "religious", fixed(Month::August, 15))
                .with_name("de", "Mariä Himmelfahrt")
                .with_name("en", "Assumption Day")
                .with_subdivisions(["BY", "SL"]),
            CatalogEntry::new(
                "Tag der Deutschen Einheit",
                "public",
                fixed(Month::October, 3),
            )
            .with_name("de", "Tag der Deutschen Einheit")
            .with_name("en", "German Unity Day")
            .with_validity(YearRange::from(1990)),
            CatalogEntry::new("Reformationstag", "religious", fixed(Month::October, 31))
                .with_name("de", "Reformationstag")
                .with_name("en", "Reformation Day")
                .with_subdivisions(["BB", "MV", "SN", "ST", "TH"]),
            CatalogEntry::new("Erster Weihnachtstag", "public", fixed(Month::December, 25))
                .with_name("de", "Erster Weihnachtstag")
                .with_name("en", "Christmas Day"),
            CatalogEntry::new("Zweiter Weihnachtstag", "public", fixed(Month::December, 26))
                .with_name("de", "Zweiter Weihnachtstag")
                .with_name("en", "Boxing Day"),
        ],
    )
}
