use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A (year, month, day) triple in either calendar.
///
/// The value does not record which calendar it belongs to; that follows
/// from the function that produced it. Within one calendar the derived
/// ordering is chronological.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Builds a date from its components without validating them.
    /// Use [`crate::ethiopian::validate`] or [`crate::gregorian::validate`]
    /// to check a triple against a calendar.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the components as a plain tuple
    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl PartialEq<(i32, u8, u8)> for CalendarDate {
    fn eq(&self, other: &(i32, u8, u8)) -> bool {
        self.to_tuple() == *other
    }
}

/// The calendar a date is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "Ethiopian")]
    Ethiopian,
    #[display(fmt = "Gregorian")]
    Gregorian,
}

/// Day of the week, shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Weekday of a Gregorian ordinal (ordinal 0, 0001-01-01, was a Monday)
    pub(crate) const fn from_gregorian_ordinal(ordinal: i32) -> Self {
        match ordinal.rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}
