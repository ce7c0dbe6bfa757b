/// Maximum supported year (inclusive) in either calendar
pub const MAX_YEAR: i32 = 9999;

/// Minimum supported year (inclusive) in either calendar
pub const MIN_YEAR: i32 = 1;

/// First day of any month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Meskerem, the first Ethiopian month
pub const MESKEREM: u8 = 1;
/// Month number for Pagume, the intercalary Ethiopian month
pub const PAGUME: u8 = 13;

/// Number of months in an Ethiopian year
pub const ETHIOPIAN_MONTHS: u8 = 13;
/// Length of each of the twelve regular Ethiopian months
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;
/// Days in Pagume for a common year
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for a leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Number of months in a Gregorian year
pub const GREGORIAN_MONTHS: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: i32 = 365;

/// Leap year occurs every 4 years in both calendars
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not Gregorian leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Ethiopian years whose remainder mod 4 equals this carry a sixth Pagume day
pub(crate) const ETHIOPIAN_LEAP_REMAINDER: i32 = 3;

/// Days in each repeating cycle, longest first
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;

/// Anchor pair calibrating the two day counts: Meskerem 1, 2012 EC fell on
/// 12 September 2019 G.
pub const ANCHOR_ETHIOPIAN: (i32, u8, u8) = (2012, 1, 1);
/// Gregorian side of the anchor pair.
pub const ANCHOR_GREGORIAN: (i32, u8, u8) = (2019, 9, 12);
