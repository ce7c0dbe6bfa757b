//! Conversion between the Ethiopian and the proleptic Gregorian calendar.
//!
//! Both calendars are reduced to a day ordinal counted from their own
//! epoch; the two counts differ by [`EPOCH_OFFSET`] days, so a conversion
//! is one addition or subtraction between the two ordinal transforms.
//!
//! ```
//! use ethiocalendar::{to_ethiopian, to_gregorian};
//!
//! // Meskerem 1, 2012 EC
//! let gregorian = to_gregorian(2012, 1, 1)?;
//! assert_eq!(gregorian, (2019, 9, 12));
//!
//! let ethiopian = to_ethiopian(2025, 11, 12)?;
//! assert_eq!(ethiopian.to_string(), "2018-03-03");
//!
//! // Pagume only has a sixth day in leap years
//! assert!(to_gregorian(2016, 13, 6).is_err());
//! # Ok::<(), ethiocalendar::InvalidDate>(())
//! ```

#[macro_use]
mod logging;

mod consts;
mod error;
pub mod ethiopian;
pub mod gregorian;
mod prelude;
mod types;

pub use consts::*;
pub use error::{Component, InvalidDate};
pub use types::{Calendar, CalendarDate, Weekday};

/// Days between the Gregorian and the Ethiopian epoch: Meskerem 1, 1 EC
/// has this Gregorian ordinal. Derived from the anchor pair.
pub const EPOCH_OFFSET: i32 = gregorian::ordinal(
    ANCHOR_GREGORIAN.0,
    ANCHOR_GREGORIAN.1,
    ANCHOR_GREGORIAN.2,
) - ethiopian::ordinal(
    ANCHOR_ETHIOPIAN.0,
    ANCHOR_ETHIOPIAN.1,
    ANCHOR_ETHIOPIAN.2,
);

/// Converts an Ethiopian date to the Gregorian calendar.
///
/// # Errors
/// Returns [`InvalidDate`] if the Ethiopian date is not valid, or if its
/// Gregorian equivalent falls after year [`MAX_YEAR`].
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<CalendarDate, InvalidDate> {
    let ordinal = ethiopian::to_ordinal(year, month, day)?;
    let converted = gregorian::from_ordinal(ordinal + EPOCH_OFFSET);
    trace!("ethiopian {year:04}-{month:02}-{day:02} (day {ordinal}) -> gregorian {converted}");
    within_range(Calendar::Ethiopian, (year, month, day), converted)
}

/// Converts a Gregorian date to the Ethiopian calendar.
///
/// # Errors
/// Returns [`InvalidDate`] if the Gregorian date is not valid, or if it
/// precedes Meskerem 1, 1 EC (27 August 8 G).
pub fn to_ethiopian(year: i32, month: u8, day: u8) -> Result<CalendarDate, InvalidDate> {
    let ordinal = gregorian::to_ordinal(year, month, day)?;
    let converted = ethiopian::from_ordinal(ordinal - EPOCH_OFFSET);
    trace!("gregorian {year:04}-{month:02}-{day:02} (day {ordinal}) -> ethiopian {converted}");
    within_range(Calendar::Gregorian, (year, month, day), converted)
}

/// Gregorian date of Ethiopian New Year (Meskerem 1) of `year`.
///
/// Between 1900 and 2099 G this is September 11, or September 12 when
/// the following Gregorian year is a leap year.
///
/// # Errors
/// Returns [`InvalidDate`] if `year` is outside the supported range.
pub fn new_year(year: i32) -> Result<CalendarDate, InvalidDate> {
    to_gregorian(year, MESKEREM, MIN_DAY)
}

/// Rejects a conversion whose result leaves the supported year range, so
/// every successful conversion can be reversed.
fn within_range(
    calendar: Calendar,
    input: (i32, u8, u8),
    converted: CalendarDate,
) -> Result<CalendarDate, InvalidDate> {
    if (MIN_YEAR..=MAX_YEAR).contains(&converted.year()) {
        Ok(converted)
    } else {
        Err(InvalidDate::new(calendar, input, Component::Year))
    }
}
