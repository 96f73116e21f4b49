//! Weekend-adjustment policies for observed holiday dates.
//!
//! A policy is a pure function of the weekday. It does not know which holiday
//! it is moving; the catalog decides which entries carry which policy.

use crate::date::Date;
use crate::weekday::Weekday;

/// How to move a holiday that falls on an inconvenient weekday to the date it
/// is actually observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservedPolicy {
    /// Keep the nominal date.
    #[default]
    Unadjusted,
    /// Move every non-Monday date to a Monday: Tuesday–Friday shift back to
    /// that week's Monday, Saturday and Sunday shift forward to the next
    /// Monday.
    ToMonday,
}

impl ObservedPolicy {
    /// Apply the policy to a nominal date.
    ///
    /// Within the supported civil range the shift never leaves the range: the
    /// largest forward move is +2 days from a Saturday, and the latest
    /// Saturday (2199-12-28) still lands inside it.
    pub fn apply(&self, date: Date) -> Date {
        match self {
            ObservedPolicy::Unadjusted => date,
            ObservedPolicy::ToMonday => match date.weekday() {
                Weekday::Monday => date,
                Weekday::Tuesday => date - 1,
                Weekday::Wednesday => date - 2,
                Weekday::Thursday => date - 3,
                Weekday::Friday => date - 4,
                Weekday::Saturday => date + 2,
                Weekday::Sunday => date + 1,
            },
        }
    }
}

impl std::fmt::Display for ObservedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ObservedPolicy::Unadjusted => "Unadjusted",
            ObservedPolicy::ToMonday => "To Monday",
        };
        write!(f, "{s}")
    }
}
