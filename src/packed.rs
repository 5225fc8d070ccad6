//! 32-bit packed timestamp with 2-second resolution.
//!
//! | bits  | field                                |
//! |-------|--------------------------------------|
//! | 0-4   | second / 2                           |
//! | 5-10  | minute                               |
//! | 11-15 | hour                                 |
//! | 16-20 | day                                  |
//! | 21-24 | month                                |
//! | 25-31 | years elapsed since the timebase year |
//!
//! Only the year offset is stored, so a decoder must use the same timebase
//! as the encoder.

use crate::calendar::weekday_of;
use crate::types::{CalendarError, CalendarTime, Weekday};

const SECOND_SHIFT: u32 = 0;
const MINUTE_SHIFT: u32 = 5;
const HOUR_SHIFT: u32 = 11;
const DAY_SHIFT: u32 = 16;
const MONTH_SHIFT: u32 = 21;
const YEAR_SHIFT: u32 = 25;

const SECOND_MASK: u32 = 0x1F;
const MINUTE_MASK: u32 = 0x3F;
const HOUR_MASK: u32 = 0x1F;
const DAY_MASK: u32 = 0x1F;
const MONTH_MASK: u32 = 0x0F;
const YEAR_MASK: u32 = 0x7F;

/// Largest year offset the packed layout can hold.
pub const MAX_YEAR_OFFSET: u16 = YEAR_MASK as u16;

/// A calendar instant packed into 32 bits relative to a timebase year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedTime(u32);

impl PackedTime {
    /// Wraps a raw packed value without checking it.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw packed value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Years elapsed since the timebase year.
    #[inline]
    pub const fn year_offset(self) -> u8 {
        ((self.0 >> YEAR_SHIFT) & YEAR_MASK) as u8
    }

    #[inline]
    pub const fn month(self) -> u8 {
        ((self.0 >> MONTH_SHIFT) & MONTH_MASK) as u8
    }

    #[inline]
    pub const fn day(self) -> u8 {
        ((self.0 >> DAY_SHIFT) & DAY_MASK) as u8
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        ((self.0 >> HOUR_SHIFT) & HOUR_MASK) as u8
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        ((self.0 >> MINUTE_SHIFT) & MINUTE_MASK) as u8
    }

    /// Seconds, always even.
    #[inline]
    pub const fn second(self) -> u8 {
        (((self.0 >> SECOND_SHIFT) & SECOND_MASK) as u8) * 2
    }
}

impl From<u32> for PackedTime {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<PackedTime> for u32 {
    fn from(packed: PackedTime) -> Self {
        packed.0
    }
}

/// Packs `time` relative to `base_year`. Odd seconds round down.
///
/// # Errors
/// * `InvalidTime(field)` - A field of `time` is out of range
/// * `Underflow` - `time.year` is before `base_year`
/// * `Overflow` - `time.year` is more than [`MAX_YEAR_OFFSET`] years after `base_year`
pub(crate) fn pack(time: &CalendarTime, base_year: u16) -> Result<PackedTime, CalendarError> {
    time.validate_fields().map_err(CalendarError::InvalidTime)?;

    let offset = time
        .year
        .checked_sub(base_year)
        .ok_or(CalendarError::Underflow)?;
    if offset > MAX_YEAR_OFFSET {
        return Err(CalendarError::Overflow);
    }

    let bits = (u32::from(offset) << YEAR_SHIFT)
        | (u32::from(time.month) << MONTH_SHIFT)
        | (u32::from(time.day) << DAY_SHIFT)
        | (u32::from(time.hour) << HOUR_SHIFT)
        | (u32::from(time.minute) << MINUTE_SHIFT)
        | (u32::from(time.second / 2) << SECOND_SHIFT);

    Ok(PackedTime(bits))
}

/// Unpacks `packed` relative to `base_year`, deriving the weekday from the date.
///
/// # Errors
/// * `InvalidTime(field)` - A decoded field is out of range
/// * `Overflow` - The absolute year does not fit in a `u16`
pub(crate) fn unpack(packed: PackedTime, base_year: u16) -> Result<CalendarTime, CalendarError> {
    let year = base_year
        .checked_add(u16::from(packed.year_offset()))
        .ok_or(CalendarError::Overflow)?;

    let mut time = CalendarTime {
        year,
        month: packed.month(),
        day: packed.day(),
        weekday: Weekday::Sunday,
        hour: packed.hour(),
        minute: packed.minute(),
        second: packed.second(),
    };

    // A 5-bit seconds field decodes to as much as 62
    time.validate_fields().map_err(CalendarError::InvalidTime)?;

    time.weekday = weekday_of(time.year, time.month, time.day);
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeField;

    #[test]
    fn layout_matches_bit_table() {
        let time = CalendarTime::new(1981, 12, 31, Weekday::Thursday, 23, 59, 59);
        let packed = pack(&time, 1980).unwrap();

        assert_eq!(packed.bits() & 0x1F, 29);
        assert_eq!((packed.bits() >> 5) & 0x3F, 59);
        assert_eq!((packed.bits() >> 11) & 0x1F, 23);
        assert_eq!((packed.bits() >> 16) & 0x1F, 31);
        assert_eq!((packed.bits() >> 21) & 0x0F, 12);
        assert_eq!(packed.bits() >> 25, 1);
    }

    #[test]
    fn accessors_decode_fields() {
        let packed = PackedTime::from_bits((5 << 25) | (6 << 21) | (15 << 16) | (8 << 11) | (30 << 5) | 7);

        assert_eq!(packed.year_offset(), 5);
        assert_eq!(packed.month(), 6);
        assert_eq!(packed.day(), 15);
        assert_eq!(packed.hour(), 8);
        assert_eq!(packed.minute(), 30);
        assert_eq!(packed.second(), 14);
    }

    #[test]
    fn unpack_rejects_zero_value() {
        assert_eq!(
            unpack(PackedTime::from_bits(0), 1980),
            Err(CalendarError::InvalidTime(TimeField::Month))
        );
    }

    #[test]
    fn unpack_rejects_seconds_field_past_59() {
        let packed = PackedTime::from_bits((1 << 21) | (1 << 16) | 30);
        assert_eq!(
            unpack(packed, 1980),
            Err(CalendarError::InvalidTime(TimeField::Second))
        );
    }

    #[test]
    fn unpack_reports_year_overflow() {
        let packed = PackedTime::from_bits((127 << 25) | (1 << 21) | (1 << 16));
        assert_eq!(unpack(packed, u16::MAX - 10), Err(CalendarError::Overflow));
    }
}
