//! Gregorian calendar helpers.
//!
//! Pure functions shared by both converters and the packed codec.

use crate::types::Weekday;

/// Returns true if `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries that are not divisible by 400.
#[inline]
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1-12.
#[inline]
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the weekday of a Gregorian date.
///
/// The date is not validated; callers pass a month in 1-12.
pub fn weekday_of(year: u16, month: u8, day: u8) -> Weekday {
    // Sakamoto's method, months shifted so the leap day is the last day of the year
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let month = month.clamp(1, 12);
    let y = if month < 3 {
        u32::from(year.saturating_sub(1))
    } else {
        u32::from(year)
    };
    let index = (y + y / 4 - y / 100 + y / 400 + OFFSETS[usize::from(month - 1)] + u32::from(day)) % 7;

    Weekday::Sunday.add_days(index)
}
