//! `Date` — a civil calendar date.
//!
//! Dates are stored as a serial number of days since an epoch: serial 1 is
//! **January 1, 1900** (a Monday). A `Date` is date-only; there is no
//! time-of-day and no timezone, so holiday dates never suffer DST ambiguity.
//!
//! The supported civil range is 1900-01-01 to 2199-12-31. The upper bound is
//! deliberate: the Julian→Gregorian century-offset table used for Orthodox
//! feasts is defined per-century, and 2199 closes the last century this
//! library tabulates.

use crate::weekday::Weekday;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

/// First supported year.
pub const MIN_YEAR: Year = 1900;

/// Last supported year.
pub const MAX_YEAR: Year = 2199;

/// A civil calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum representable date: 1900-01-01.
    pub const MIN: Date = Date(1);

    /// Maximum representable date: 2199-12-31.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backward). Returns an error if the
    /// result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    // ── Ordinal weekday resolution ────────────────────────────────────────────

    /// Return the *n*-th occurrence of `weekday` in `year`/`month` (n ≥ 1).
    ///
    /// Finds the first such weekday on/after the 1st, then advances (n−1)
    /// weeks. Errors if the month has no n-th occurrence.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let day = 1 + first.weekday().days_until(weekday) as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: no {n}-th {weekday} in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    ///
    /// Steps backward from the last day of the month to the most recent such
    /// weekday.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        last.add_days(-(last.weekday().days_since(weekday) as i32))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let bad = || Error::Date(format!("expected YYYY-MM-DD, got {s:?}"));
        let y: Year = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let m: u8 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let d: u8 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        Date::from_ymd(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Civil-calendar helpers ────────────────────────────────────────────────────

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in `[1900, year)`.
fn leap_years_before(year: Year) -> i32 {
    let f = |n: i32| n / 4 - n / 100 + n / 400;
    f(year - 1) - f(MIN_YEAR - 1)
}

/// Convert (year, month, day) to a serial number. Serial 1 = 1900-01-01.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let mut serial = (year - MIN_YEAR) * 365 + leap_years_before(year);
    serial += MONTH_OFFSET[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // First estimate of the year, then correct by at most one step.
    let mut y = serial / 365 + MIN_YEAR;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let len = days_in_month(y, m) as i32;
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
    }

    #[test]
    fn max_serial() {
        let d = Date::from_ymd(2199, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap century
            (2100, 2, 28), // non-leap century
            (2024, 3, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn rejects_out_of_domain() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(-44, 3, 15).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
    }

    #[test]
    fn weekday_known_dates() {
        // 2024-01-01 is a Monday, 2024-01-06 a Saturday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            Date::from_ymd(2024, 1, 6).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn arithmetic_crosses_months() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!((d2.month(), d2.day_of_month()), (2, 1));
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
    }

    #[test]
    fn end_of_month_leap() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29);
    }

    #[test]
    fn nth_weekday_examples() {
        // 3rd Monday of January 2024 = Jan 15 (MLK Day)
        let mlk = Date::nth_weekday(3, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(mlk, Date::from_ymd(2024, 1, 15).unwrap());

        // 4th Thursday of November 2024 = Nov 28 (Thanksgiving)
        let tg = Date::nth_weekday(4, Weekday::Thursday, 2024, 11).unwrap();
        assert_eq!(tg, Date::from_ymd(2024, 11, 28).unwrap());

        // 1st Monday of January 2024 = Jan 1
        let d = Date::nth_weekday(1, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn nth_weekday_out_of_range() {
        // No 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn last_weekday_examples() {
        // Last Monday of May 2024 = May 27 (Memorial Day)
        let d = Date::last_weekday(Weekday::Monday, 2024, 5).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 5, 27).unwrap());

        // Last day of a month that already is the target weekday:
        // 2024-03-31 is a Sunday.
        let d = Date::last_weekday(Weekday::Sunday, 2024, 3).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 3, 31).unwrap());
    }

    #[test]
    fn parse_iso() {
        let d: Date = "2024-03-31".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2024, 3, 31).unwrap());
        assert_eq!(d.to_string(), "2024-03-31");
        assert!("2024-3".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
    }
}
