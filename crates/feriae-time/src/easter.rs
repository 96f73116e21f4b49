//! Easter computation for the Western (Gregorian) and Orthodox (Julian) rites.
//!
//! Both algorithms are closed-form integer arithmetic: no iteration, no
//! tables, no astronomical ephemeris. Every movable feast expressed as
//! "N days before/after Easter" derives from the dates computed here.

use crate::date::Date;
use feriae_core::errors::Result;
use feriae_core::Year;

/// Gregorian (Western) Easter Sunday for `year`.
///
/// Anonymous Gregorian ("Meeus/Jones/Butcher") algorithm. All divisions are
/// integer floor divisions; every intermediate is non-negative for supported
/// years, so `/` and `%` behave as floor division here.
pub fn gregorian_easter(year: Year) -> Result<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Orthodox Easter Sunday for `year`, as a Gregorian civil date.
///
/// Computes Easter under the Julian calendar, then re-expresses the Julian
/// date in the Gregorian civil calendar by adding the century offset.
pub fn orthodox_easter(year: Year) -> Result<Date> {
    let (month, day) = julian_easter_ymd(year);
    // The (month, day) pair is a Julian-calendar date. Interpreting the same
    // numbers as Gregorian and shifting by the century offset converts it.
    let julian = Date::from_ymd(year, month, day)?;
    julian.add_days(julian_gregorian_offset(year))
}

/// Days to add to a Julian calendar date to obtain the Gregorian civil date.
///
/// A step function of the century: 13 for 1900–2099, 14 for 2100–2199. Each
/// Gregorian-skipped century leap day widens the gap by one.
pub fn julian_gregorian_offset(year: Year) -> i32 {
    year / 100 - year / 400 - 2
}

/// Julian-calendar Easter Sunday (month, day) for `year`.
fn julian_easter_ymd(year: Year) -> (u8, u8) {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    (month as u8, day as u8)
}
