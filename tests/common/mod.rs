//! Shared test infrastructure for rtc-calendar integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use rtc_calendar::{CalendarClock, CalendarTime, RawCounterSource, Timebase, Weekday};

// ============================================================================
// Mock Counter
// ============================================================================

/// Mock RTC counter that records every write
pub struct MockCounter {
    value: core::cell::Cell<u32>,
    write_history: heapless::Vec<u32, 32>,
}

impl MockCounter {
    pub fn new(value: u32) -> Self {
        Self {
            value: core::cell::Cell::new(value),
            write_history: heapless::Vec::new(),
        }
    }

    /// Advance the counter as the hardware would, one tick per second
    pub fn tick(&self, seconds: u32) {
        self.value.set(self.value.get().wrapping_add(seconds));
    }

    pub fn write_history(&self) -> &[u32] {
        &self.write_history
    }
}

impl RawCounterSource for MockCounter {
    fn read(&self) -> u32 {
        self.value.get()
    }

    fn write(&mut self, value: u32) {
        self.value.set(value);
        let _ = self.write_history.push(value);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// 00:00:00, Tuesday 1 January 1980
pub const TIMEBASE_1980: CalendarTime = CalendarTime::new(1980, 1, 1, Weekday::Tuesday, 0, 0, 0);

/// A timebase in the middle of a month and a day, 13:45:50, Saturday 17 May 2025
pub const TIMEBASE_MID_MONTH: CalendarTime =
    CalendarTime::new(2025, 5, 17, Weekday::Saturday, 13, 45, 50);

pub fn clock_at(instant: CalendarTime) -> CalendarClock {
    CalendarClock::new(Timebase::new(instant).expect("valid timebase"))
}

// ============================================================================
// Reference calendar (chrono)
// ============================================================================

pub fn to_naive(time: &CalendarTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(i32::from(time.year), u32::from(time.month), u32::from(time.day))
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(time.hour),
                u32::from(time.minute),
                u32::from(time.second),
            )
        })
        .expect("valid calendar time")
}

pub fn from_naive(naive: &NaiveDateTime) -> CalendarTime {
    CalendarTime::new(
        naive.year() as u16,
        naive.month() as u8,
        naive.day() as u8,
        Weekday::from_index(naive.weekday().num_days_from_sunday() as u8).expect("weekday index"),
        naive.hour() as u8,
        naive.minute() as u8,
        naive.second() as u8,
    )
}

/// The instant `raw` seconds after `timebase`, computed by chrono
pub fn reference_calendar(timebase: &CalendarTime, raw: u32) -> CalendarTime {
    let naive = to_naive(timebase)
        .checked_add_signed(chrono::Duration::seconds(i64::from(raw)))
        .expect("in chrono range");
    from_naive(&naive)
}

/// Seconds from `timebase` to `time`, computed by chrono
pub fn reference_raw(timebase: &CalendarTime, time: &CalendarTime) -> i64 {
    (to_naive(time) - to_naive(timebase)).num_seconds()
}
