//! Greece holiday catalog.

use feriae_core::errors::Result;
use feriae_time::Month;

use crate::entry::CatalogEntry;
use crate::provider::CatalogProvider;
use crate::rule::{DateRule, MonthDay};

/// Public and religious holidays of Greece. The movable feasts follow the
/// Orthodox (Julian) Easter.
///
/// * Πρωτοχρονιά (Jan 1)
/// * Θεοφάνεια (Jan 6)
/// * Καθαρά Δευτέρα (Orthodox Easter −48)
/// * Εικοστή Πέμπτη Μαρτίου (Mar 25)
/// * Μεγάλη Παρασκευή (Orthodox Easter −2)
/// * Δευτέρα του Πάσχα (Orthodox Easter +1)
/// * Εργατική Πρωτομαγιά (May 1)
/// * Δευτέρα του Αγίου Πνεύματος (Orthodox Easter +50)
/// * Κοίμηση της Θεοτόκου (Aug 15)
/// * Ημέρα του Όχι (Oct 28)
/// * Χριστούγεννα (Dec 25)
/// * Σύναξη της Θεοτόκου (Dec 26)
pub fn provider() -> Result<CatalogProvider> {
    let fixed = |m: Month, d: u8| DateRule::Fixed(MonthDay::new(m, d));
    let orthodox = |days: i32| DateRule::OrthodoxEasterOffset { days };
    CatalogProvider::new(
        "GR",
        vec![
            CatalogEntry::new("Πρωτοχρονιά", "public", fixed(Month::January, 1))
                .with_name("el", "Πρωτοχρονιά")
                .with_name("en", "New Year's Day"),
            CatalogEntry::new("Θεοφάνεια", "religious", fixed(Month::January, 6))
                .with_name("el", "Θεοφάνεια")
                .with_name("en", "Epiphany"),
            CatalogEntry::new("Καθαρά Δευτέρα", "religious", orthodox(-48))
                .with_name("el", "Καθαρά Δευτέρα")
                .with_name("en", "Clean Monday"),
            CatalogEntry::new("Εικοστή Πέμπτη Μαρτίου", "public", fixed(Month::March, 25))
                .with_name("el", "Εικοστή Πέμπτη Μαρτίου")
                .with_name("en", "Independence Day"),
            CatalogEntry::new("Μεγάλη Παρασκευή", "religious", orthodox(-2))
                .with_name("el", "Μεγάλη Παρασκευή")
                .with_name("en", "Good Friday"),
            CatalogEntry::new("Δευτέρα του Πάσχα", "religious", orthodox(1))
                .with_name("el", "Δευτέρα του Πάσχα")
                .with_name("en", "Easter Monday"),
            CatalogEntry::new("Εργατική Πρωτομαγιά", "public", fixed(Month::May, 1))
                .with_name("el", "Εργατική Πρωτομαγιά")
                .with_name("en", "Labour Day"),
            CatalogEntry::new("Δευτέρα του Αγίου Πνεύματος", "religious", orthodox(50))
                .with_name("el", "Δευτέρα του Αγίου Πνεύματος")
                .with_name("en", "Whit Monday"),
            CatalogEntry::new("Κοίμηση της Θεοτόκου", "religious", fixed(Month::August, 15))
                .with_name("el", "Κοίμηση της Θεοτόκου")
                .with_name("en", "Dormition of the Mother of God"),
            CatalogEntry::new("Ημέρα του Όχι", "public", fixed(Month::October, 28))
                .with_name("el", "Ημέρα του Όχι")
                .with_name("en", "Ochi Day"),
            CatalogEntry::new("Χριστούγεννα", "public", fixed(Month::December, 25))
                .with_name("el", "Χριστούγεννα")
                .with_name("en", "Christmas Day"),
            CatalogEntry::new("Σύναξη της Θεοτόκου", "religious", fixed(Month::December, 26))
                .with_name("el", "Σύναξη της Θεοτόκου")
                .with_name("en", "Synaxis of the Mother of God"),
        ],
    )
}
