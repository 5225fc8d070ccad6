#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Timebase`**: The validated calendar instant that raw counter value 0 stands for
//! - **`CalendarTime`**: A date, weekday and time of day with second resolution
//! - **`CalendarClock`**: Converts raw counter values to calendar time and back
//! - **`PackedTime`**: A lossy 32-bit encoding of calendar time relative to the timebase year
//! - **`RawCounterSource`**: Trait to implement for your RTC counter hardware
//! - **`Rtc`**: Reads and sets calendar time through a counter source
//! - **`CalendarError`**: Why a timebase, conversion or setting was rejected
//!
//! Every conversion returns an explicit `Result`. Instants before the timebase
//! are reported as `Underflow`, never as a zero counter value.

pub mod calendar;
pub mod clock;
pub mod counter;
pub mod packed;
pub mod rtc;
pub mod timebase;
pub mod types;

pub use calendar::{days_in_month, is_leap_year, weekday_of};
pub use clock::CalendarClock;
pub use counter::RawCounterSource;
pub use packed::{MAX_YEAR_OFFSET, PackedTime};
pub use rtc::Rtc;
pub use timebase::{DEFAULT_TIMEBASE, MAX_TIMEBASE_YEAR, Timebase};
pub use types::{CalendarError, CalendarTime, TimeField, Weekday};
