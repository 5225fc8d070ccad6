//! Core calendar types and errors.

use crate::calendar::days_in_month;
use core::cmp::Ordering;
use core::fmt::Write;

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Creates a weekday from its index (0 = Sunday, 6 = Saturday).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the index of this weekday (0 = Sunday, 6 = Saturday).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the weekday `days` days after this one.
    #[inline]
    pub fn add_days(self, days: u32) -> Self {
        let index = (u32::from(self.index()) + days % 7) % 7;
        Self::ALL[index as usize]
    }
}

/// A calendar field, used to report which part of a value is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Minute,
    Second,
}

impl core::fmt::Display for TimeField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TimeField::Year => "year",
            TimeField::Month => "month",
            TimeField::Day => "day",
            TimeField::Weekday => "weekday",
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        };
        f.write_str(name)
    }
}

/// A calendar date and time of day with second resolution.
///
/// Field ranges are not enforced on construction. Conversions validate
/// their inputs and report the first offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    /// Absolute year, e.g. 1980.
    pub year: u16,

    /// Month, 1-12.
    pub month: u8,

    /// Day of the month, 1-31.
    pub day: u8,

    /// Day of the week.
    pub weekday: Weekday,

    /// Hour, 0-23.
    pub hour: u8,

    /// Minute, 0-59.
    pub minute: u8,

    /// Second, 0-59.
    pub second: u8,
}

impl CalendarTime {
    /// Creates a calendar time from its fields.
    #[inline]
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        weekday: Weekday,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        }
    }

    /// Checks that month, day, hour, minute and second are in range.
    ///
    /// The weekday is not checked against the date.
    ///
    /// # Errors
    /// Returns the first field found out of range, largest unit first.
    pub fn validate_fields(&self) -> Result<(), TimeField> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeField::Month);
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeField::Day);
        }
        if self.hour > 23 {
            return Err(TimeField::Hour);
        }
        if self.minute > 59 {
            return Err(TimeField::Minute);
        }
        if self.second > 59 {
            return Err(TimeField::Second);
        }
        Ok(())
    }

    /// Orders two instants by (year, month, day, hour, minute, second).
    ///
    /// The weekday does not take part in the comparison.
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        self.instant_key().cmp(&other.instant_key())
    }

    /// Returns true if this instant is strictly earlier than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.cmp_instant(other) == Ordering::Less
    }

    /// Formats as `YYYY-MM-DDTHH:MM:SS` without allocating.
    pub fn to_iso_string(&self) -> heapless::String<20> {
        let mut out = heapless::String::new();
        // 5-digit year is the widest u16 rendering, which fits the capacity
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        );
        out
    }

    fn instant_key(&self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl core::fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Errors reported by calendar conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    /// The timebase has a field out of range, or a weekday that does not
    /// match its date.
    InvalidTimebase(TimeField),

    /// A calendar or packed value has a field out of range.
    InvalidTime(TimeField),

    /// The instant lies before the timebase.
    Underflow,

    /// The instant lies beyond the range of the raw counter or the packed
    /// year offset.
    Overflow,
}

impl core::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalendarError::InvalidTimebase(field) => {
                write!(f, "invalid {} in timebase", field)
            }
            CalendarError::InvalidTime(field) => {
                write!(f, "invalid {} in time", field)
            }
            CalendarError::Underflow => {
                write!(f, "time is earlier than the timebase")
            }
            CalendarError::Overflow => {
                write!(f, "time exceeds the representable range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalendarError {}
