//! Proleptic Gregorian calendar arithmetic.
//!
//! Ordinals count days from 1 January 1 G (ordinal 0).

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS,
    DAYS_PER_400_YEARS, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_MONTHS,
    LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::{Component, InvalidDate};
use crate::types::{Calendar, CalendarDate, Weekday};

/// Whether `year` has a February 29.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or 0 for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 0 || month > GREGORIAN_MONTHS {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in `year`, 366 for a leap year.
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        DAYS_IN_COMMON_YEAR + 1
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Checks that the triple names a real Gregorian date in the supported
/// year range.
///
/// # Errors
/// Returns [`InvalidDate`] naming the first component out of range.
pub fn validate(year: i32, month: u8, day: u8) -> Result<CalendarDate, InvalidDate> {
    let reject = |component| InvalidDate::new(Calendar::Gregorian, (year, month, day), component);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(reject(Component::Year));
    }
    if !(1..=GREGORIAN_MONTHS).contains(&month) {
        return Err(reject(Component::Month));
    }
    if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
        return Err(reject(Component::Day));
    }
    Ok(CalendarDate::new(year, month, day))
}

const fn days_before_year(year: i32) -> i32 {
    let y = year - 1;
    DAYS_IN_COMMON_YEAR * y + y.div_euclid(LEAP_YEAR_CYCLE) - y.div_euclid(CENTURY_CYCLE)
        + y.div_euclid(GREGORIAN_CYCLE)
}

const fn days_before_month(year: i32, month: u8) -> i32 {
    let mut days = 0;
    let mut m = 1;
    while m < month {
        days += days_in_month(year, m) as i32;
        m += 1;
    }
    days
}

/// Day count of a date already known to be valid.
pub(crate) const fn ordinal(year: i32, month: u8, day: u8) -> i32 {
    days_before_year(year) + days_before_month(year, month) + (day as i32 - 1)
}

/// Converts a Gregorian date to its day ordinal.
///
/// # Errors
/// Returns [`InvalidDate`] if the date is not valid.
pub fn to_ordinal(year: i32, month: u8, day: u8) -> Result<i32, InvalidDate> {
    validate(year, month, day)?;
    Ok(ordinal(year, month, day))
}

/// Recovers the Gregorian date for a day ordinal.
///
/// Ordinals before 1 January 1 yield proleptic years of zero or below.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_ordinal(ordinal_day: i32) -> CalendarDate {
    let n400 = ordinal_day.div_euclid(DAYS_PER_400_YEARS);
    let rest = ordinal_day.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = rest / DAYS_PER_100_YEARS;
    let rest = rest % DAYS_PER_100_YEARS;
    let n4 = rest / DAYS_PER_4_YEARS;
    let rest = rest % DAYS_PER_4_YEARS;
    let n1 = rest / DAYS_IN_COMMON_YEAR;

    let completed = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // n100 == 4 or n1 == 4 only on the final day of a leap year, which
    // still belongs to the last completed year.
    let year = if n100 == 4 || n1 == 4 {
        completed
    } else {
        completed + 1
    };

    let mut remaining = ordinal_day - days_before_year(year);
    let mut month = 1;
    while month < GREGORIAN_MONTHS && remaining >= days_in_month(year, month) as i32 {
        remaining -= days_in_month(year, month) as i32;
        month += 1;
    }
    // remaining < days_in_month <= 31
    CalendarDate::new(year, month, remaining as u8 + 1)
}

/// Day of the week for a Gregorian date.
///
/// # Errors
/// Returns [`InvalidDate`] if the date is not valid.
pub fn weekday(year: i32, month: u8, day: u8) -> Result<Weekday, InvalidDate> {
    to_ordinal(year, month, day).map(Weekday::from_gregorian_ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_validate() {
        assert!(validate(2024, 2, 29).is_ok());
        assert!(validate(2000, 2, 29).is_ok());

        let err = validate(2023, 2, 29).unwrap_err();
        assert_eq!(err.component(), Component::Day);
        assert_eq!(err.calendar(), Calendar::Gregorian);

        assert_eq!(validate(1900, 2, 29).unwrap_err().component(), Component::Day);
        assert_eq!(validate(2024, 4, 31).unwrap_err().component(), Component::Day);
        assert_eq!(validate(2024, 13, 1).unwrap_err().component(), Component::Month);
        assert_eq!(validate(0, 1, 1).unwrap_err().component(), Component::Year);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365, "Century year not divisible by 400");
        assert_eq!(days_in_year(2000), 366, "Century year divisible by 400");
        assert_eq!(days_in_year(2100), 365);
    }

    #[test]
    fn test_ordinal_known_values() {
        assert_eq!(to_ordinal(1, 1, 1).unwrap(), 0);
        assert_eq!(to_ordinal(1, 12, 31).unwrap(), 364);
        assert_eq!(to_ordinal(2, 1, 1).unwrap(), 365);
        assert_eq!(to_ordinal(401, 1, 1).unwrap(), DAYS_PER_400_YEARS);
        assert_eq!(to_ordinal(2019, 9, 12).unwrap(), 737_313);
    }

    #[test]
    fn test_from_ordinal_cycle_edges() {
        assert_eq!(from_ordinal(0), (1, 1, 1));
        assert_eq!(from_ordinal(1_460), (4, 12, 31));
        assert_eq!(from_ordinal(DAYS_PER_400_YEARS - 1), (400, 12, 31));
        assert_eq!(from_ordinal(DAYS_PER_400_YEARS), (401, 1, 1));
        assert_eq!(from_ordinal(-1), (0, 12, 31));
    }

    #[test]
    fn test_ordinal_round_trip() {
        for year in 1..=2500 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let n = to_ordinal(year, month, day).unwrap();
                    assert_eq!(from_ordinal(n), (year, month, day), "ordinal {n}");
                }
            }
        }
    }

    #[test]
    fn test_ordinals_are_consecutive() {
        let mut expected = to_ordinal(1896, 1, 1).unwrap();
        for year in 1896..=1904 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    assert_eq!(to_ordinal(year, month, day).unwrap(), expected);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(1, 1, 1).unwrap(), Weekday::Monday);
        assert_eq!(weekday(2000, 1, 1).unwrap(), Weekday::Saturday);
        assert_eq!(weekday(2019, 9, 12).unwrap(), Weekday::Thursday);
        assert!(weekday(2023, 2, 29).is_err());
    }
}
