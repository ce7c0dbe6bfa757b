//! Ethiopian calendar arithmetic.
//!
//! Twelve months of 30 days are followed by Pagume, which has 5 days, or 6
//! in a leap year. A year is leap when `year % 4 == 3`, so the extra day
//! always closes the year and every four-year cycle holds 1461 days.
//!
//! Ordinals count days from Meskerem 1, 1 EC (ordinal 0).

use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_PER_4_YEARS, ETHIOPIAN_LEAP_REMAINDER, ETHIOPIAN_MONTH_DAYS,
    ETHIOPIAN_MONTHS, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY, MIN_YEAR, PAGUME, PAGUME_DAYS,
    PAGUME_DAYS_LEAP,
};
use crate::error::{Component, InvalidDate};
use crate::types::{Calendar, CalendarDate, Weekday};

/// Whether `year` carries a sixth Pagume day.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == ETHIOPIAN_LEAP_REMAINDER
}

/// Number of days in `month` of `year`, or 0 for a month outside `1..=13`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=12 => ETHIOPIAN_MONTH_DAYS,
        PAGUME if is_leap_year(year) => PAGUME_DAYS_LEAP,
        PAGUME => PAGUME_DAYS,
        _ => 0,
    }
}

/// Number of days in `year`, 366 when Pagume has a sixth day.
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Checks that the triple names a real Ethiopian date in the supported
/// year range.
///
/// # Errors
/// Returns [`InvalidDate`] naming the first component out of range.
pub fn validate(year: i32, month: u8, day: u8) -> Result<CalendarDate, InvalidDate> {
    let reject = |component| InvalidDate::new(Calendar::Ethiopian, (year, month, day), component);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(reject(Component::Year));
    }
    if !(1..=ETHIOPIAN_MONTHS).contains(&month) {
        return Err(reject(Component::Month));
    }
    if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
        return Err(reject(Component::Day));
    }
    Ok(CalendarDate::new(year, month, day))
}

/// Day count of a date already known to be valid.
pub(crate) const fn ordinal(year: i32, month: u8, day: u8) -> i32 {
    let prev_year = year - 1;
    // Leap years before `year` are those among 1..year with y % 4 == 3.
    let leap_days = year.div_euclid(LEAP_YEAR_CYCLE);
    DAYS_IN_COMMON_YEAR * prev_year
        + leap_days
        + ETHIOPIAN_MONTH_DAYS as i32 * (month as i32 - 1)
        + (day as i32 - 1)
}

/// Converts an Ethiopian date to its day ordinal.
///
/// # Errors
/// Returns [`InvalidDate`] if the date is not valid.
pub fn to_ordinal(year: i32, month: u8, day: u8) -> Result<i32, InvalidDate> {
    validate(year, month, day)?;
    Ok(ordinal(year, month, day))
}

/// Recovers the Ethiopian date for a day ordinal.
///
/// Ordinals before the epoch yield proleptic years of zero or below.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_ordinal(ordinal_day: i32) -> CalendarDate {
    // Each four-year cycle ends on its leap year, so the day that starts a
    // cycle's fourth year shifts by one against a plain 365-day division.
    let year = (LEAP_YEAR_CYCLE * ordinal_day + DAYS_PER_4_YEARS + 2).div_euclid(DAYS_PER_4_YEARS);
    let day_of_year = ordinal_day - ordinal(year, 1, 1);
    let month = day_of_year / ETHIOPIAN_MONTH_DAYS as i32 + 1;
    let day = day_of_year % ETHIOPIAN_MONTH_DAYS as i32 + 1;
    // day_of_year < 366, so month <= 13 and day <= 30
    CalendarDate::new(year, month as u8, day as u8)
}

/// Day of the week for an Ethiopian date.
///
/// # Errors
/// Returns [`InvalidDate`] if the date is not valid.
pub fn weekday(year: i32, month: u8, day: u8) -> Result<Weekday, InvalidDate> {
    let n = to_ordinal(year, month, day)?;
    Ok(Weekday::from_gregorian_ordinal(n + crate::EPOCH_OFFSET))
}
