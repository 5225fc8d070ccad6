//! Reference instant for raw counter values.

use crate::calendar::weekday_of;
use crate::types::{CalendarError, CalendarTime, TimeField, Weekday};

/// Latest year a timebase may start in.
///
/// A full 32-bit counter spans a little over 136 years, so every counter
/// value stays representable as a `u16` year.
pub const MAX_TIMEBASE_YEAR: u16 = u16::MAX - 137;

/// Default timebase: 00:00:00, Tuesday 1 January 1980.
pub const DEFAULT_TIMEBASE: Timebase = Timebase(CalendarTime::new(
    1980,
    1,
    1,
    Weekday::Tuesday,
    0,
    0,
    0,
));

/// The validated calendar instant that raw counter value 0 stands for.
///
/// Can only be obtained through [`Timebase::new`], which rejects values
/// with out-of-range fields or a weekday that does not match the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timebase(CalendarTime);

impl Timebase {
    /// Validates `instant` and wraps it as a timebase.
    ///
    /// # Errors
    /// * `InvalidTimebase(Year)` - Year is 0 or above [`MAX_TIMEBASE_YEAR`]
    /// * `InvalidTimebase(field)` - Month, day, hour, minute or second out of range
    /// * `InvalidTimebase(Weekday)` - Weekday does not match the date
    pub fn new(instant: CalendarTime) -> Result<Self, CalendarError> {
        if instant.year == 0 || instant.year > MAX_TIMEBASE_YEAR {
            return Err(CalendarError::InvalidTimebase(TimeField::Year));
        }

        instant
            .validate_fields()
            .map_err(CalendarError::InvalidTimebase)?;

        if weekday_of(instant.year, instant.month, instant.day) != instant.weekday {
            return Err(CalendarError::InvalidTimebase(TimeField::Weekday));
        }

        Ok(Self(instant))
    }

    /// Returns the reference instant.
    #[inline]
    pub fn instant(&self) -> &CalendarTime {
        &self.0
    }

    /// Returns the reference year, which packed year offsets count from.
    #[inline]
    pub fn year(&self) -> u16 {
        self.0.year
    }
}

impl Default for Timebase {
    fn default() -> Self {
        DEFAULT_TIMEBASE
    }
}

impl TryFrom<CalendarTime> for Timebase {
    type Error = CalendarError;

    fn try_from(instant: CalendarTime) -> Result<Self, Self::Error> {
        Self::new(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timebase_passes_validation() {
        let checked = Timebase::new(*DEFAULT_TIMEBASE.instant());
        assert_eq!(checked, Ok(DEFAULT_TIMEBASE));
    }

    #[test]
    fn rejects_day_past_month_end() {
        let instant = CalendarTime::new(2023, 2, 29, Weekday::Wednesday, 0, 0, 0);
        assert_eq!(
            Timebase::new(instant),
            Err(CalendarError::InvalidTimebase(TimeField::Day))
        );
    }

    #[test]
    fn accepts_leap_day() {
        let instant = CalendarTime::new(2024, 2, 29, Weekday::Thursday, 12, 30, 15);
        assert!(Timebase::new(instant).is_ok());
    }

    #[test]
    fn rejects_inconsistent_weekday() {
        let instant = CalendarTime::new(1980, 1, 1, Weekday::Monday, 0, 0, 0);
        assert_eq!(
            Timebase::new(instant),
            Err(CalendarError::InvalidTimebase(TimeField::Weekday))
        );
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = CalendarTime::new(1980, 1, 1, Weekday::Tuesday, 0, 0, 0);

        let cases = [
            (CalendarTime { month: 0, ..base }, TimeField::Month),
            (CalendarTime { month: 13, ..base }, TimeField::Month),
            (CalendarTime { day: 0, ..base }, TimeField::Day),
            (CalendarTime { hour: 24, ..base }, TimeField::Hour),
            (CalendarTime { minute: 60, ..base }, TimeField::Minute),
            (CalendarTime { second: 60, ..base }, TimeField::Second),
            (CalendarTime { year: 0, ..base }, TimeField::Year),
            (
                CalendarTime {
                    year: MAX_TIMEBASE_YEAR + 1,
                    ..base
                },
                TimeField::Year,
            ),
        ];

        for (instant, field) in cases {
            assert_eq!(
                Timebase::new(instant),
                Err(CalendarError::InvalidTimebase(field))
            );
        }
    }
}
