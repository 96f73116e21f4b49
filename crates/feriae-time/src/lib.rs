//! # feriae-time
//!
//! The date-rule engine: a civil `Date` type, Gregorian and Julian Easter
//! computation, ordinal-weekday resolution, and observed-date policies.
//!
//! Everything in this crate is a pure function of its arguments. There is no
//! state, no I/O, and no clock access; repeated calls with the same inputs
//! return identical results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and ordinal-weekday resolution.
pub mod date;

/// Gregorian and Julian (Orthodox) Easter computation.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// Weekend-adjustment policies for observed dates.
pub mod observed;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{gregorian_easter, julian_gregorian_offset, orthodox_easter};
pub use month::Month;
pub use observed::ObservedPolicy;
pub use weekday::Weekday;
