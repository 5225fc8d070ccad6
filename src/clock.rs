//! Conversion between raw counter values and calendar time.
//!
//! Provides [`CalendarClock`], which measures a 32-bit seconds counter from a
//! fixed [`Timebase`]. All conversions are pure functions of their input and
//! the timebase, so a shared clock can be used from several threads at once.

use crate::calendar::days_in_month;
use crate::packed::{self, PackedTime};
use crate::timebase::Timebase;
use crate::types::{CalendarError, CalendarTime};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Most whole days a 32-bit counter can span.
const MAX_COUNTER_DAYS: u64 = u32::MAX as u64 / SECONDS_PER_DAY;

/// Calendar engine anchored at a timebase.
///
/// Raw value 0 corresponds to the timebase itself, and each count is one
/// second. Instants before the timebase cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarClock {
    timebase: Timebase,
}

impl CalendarClock {
    /// Creates a clock measuring from `timebase`.
    pub const fn new(timebase: Timebase) -> Self {
        Self { timebase }
    }

    /// Returns the timebase.
    #[inline]
    pub fn timebase(&self) -> &Timebase {
        &self.timebase
    }

    /// Replaces the timebase.
    ///
    /// Raw and packed values produced under the previous timebase no longer
    /// convert to the same instants.
    pub fn set_timebase(&mut self, timebase: Timebase) {
        self.timebase = timebase;
    }

    /// Converts a raw counter value to calendar time.
    ///
    /// Never fails: a timebase year is bounded so that every counter value
    /// lands on a representable year.
    pub fn to_calendar(&self, raw: u32) -> CalendarTime {
        let base = self.timebase.instant();

        let total_seconds = u64::from(raw)
            + u64::from(base.hour) * SECONDS_PER_HOUR
            + u64::from(base.minute) * SECONDS_PER_MINUTE
            + u64::from(base.second);

        let second = (total_seconds % 60) as u8;
        let total_minutes = total_seconds / 60;
        let minute = (total_minutes % 60) as u8;
        let total_hours = total_minutes / 60;
        let hour = (total_hours % 24) as u8;
        let total_days = total_hours / 24;

        let weekday = base.weekday.add_days((total_days % 7) as u32);

        // Walk forward month by month from the timebase date
        let mut remaining = total_days;
        let mut year = base.year;
        let mut month = base.month;
        let mut day = base.day;

        loop {
            let left_in_month = u64::from(days_in_month(year, month) - day);
            if remaining <= left_in_month {
                day += remaining as u8;
                break;
            }

            remaining -= left_in_month + 1;
            day = 1;
            if month == 12 {
                month = 1;
                year += 1;
            } else {
                month += 1;
            }
        }

        CalendarTime {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        }
    }

    /// Converts a calendar time to a raw counter value.
    ///
    /// The weekday of `time` is ignored.
    ///
    /// # Errors
    /// * `InvalidTime(field)` - A field of `time` is out of range
    /// * `Underflow` - `time` is earlier than the timebase
    /// * `Overflow` - `time` is more than `u32::MAX` seconds after the timebase
    pub fn to_raw(&self, time: &CalendarTime) -> Result<u32, CalendarError> {
        time.validate_fields().map_err(CalendarError::InvalidTime)?;

        let base = self.timebase.instant();
        if time.is_before(base) {
            return Err(CalendarError::Underflow);
        }

        // Smallest unit first, each deficit borrowed from the next unit up
        let (seconds, borrow) = borrow_sub(time.second, base.second, 0, 60);
        let (minutes, borrow) = borrow_sub(time.minute, base.minute, borrow, 60);
        let (hours, borrow) = borrow_sub(time.hour, base.hour, borrow, 24);

        let days = elapsed_days(base, time)? - u64::from(borrow);

        let raw = u64::from(seconds)
            + u64::from(minutes) * SECONDS_PER_MINUTE
            + u64::from(hours) * SECONDS_PER_HOUR
            + days * SECONDS_PER_DAY;

        u32::try_from(raw).map_err(|_| CalendarError::Overflow)
    }

    /// Packs `time` into 32 bits relative to the timebase year.
    ///
    /// Odd seconds round down to the even second below.
    ///
    /// # Errors
    /// * `InvalidTime(field)` - A field of `time` is out of range
    /// * `Underflow` - `time.year` is before the timebase year
    /// * `Overflow` - `time.year` is more than 127 years after the timebase year
    pub fn pack(&self, time: &CalendarTime) -> Result<PackedTime, CalendarError> {
        packed::pack(time, self.timebase.year())
    }

    /// Unpacks a value produced by [`CalendarClock::pack`] under the same timebase.
    ///
    /// The weekday is derived from the decoded date.
    ///
    /// # Errors
    /// * `InvalidTime(field)` - A decoded field is out of range
    /// * `Overflow` - The decoded year does not fit in a `u16`
    pub fn unpack(&self, packed: PackedTime) -> Result<CalendarTime, CalendarError> {
        packed::unpack(packed, self.timebase.year())
    }
}

impl Default for CalendarClock {
    fn default() -> Self {
        Self::new(Timebase::default())
    }
}

/// Subtracts `base + borrow` from `value` in base `radix`.
///
/// Returns the difference and the borrow to carry into the next unit.
fn borrow_sub(value: u8, base: u8, borrow: u8, radix: u8) -> (u8, u8) {
    let subtrahend = base + borrow;
    if value >= subtrahend {
        (value - subtrahend, 0)
    } else {
        (value + radix - subtrahend, 1)
    }
}

/// Whole calendar days from the date of `base` to the date of `time`.
///
/// `time` must not be earlier than `base`.
fn elapsed_days(base: &CalendarTime, time: &CalendarTime) -> Result<u64, CalendarError> {
    let mut days: u64 = 0;
    let mut year = base.year;
    let mut month = base.month;

    while (year, month) != (time.year, time.month) {
        days += u64::from(days_in_month(year, month));
        if days > MAX_COUNTER_DAYS + 31 {
            return Err(CalendarError::Overflow);
        }

        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }

    Ok(days + u64::from(time.day) - u64::from(base.day))
}
