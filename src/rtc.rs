//! Real-time clock driver combining a counter source with a calendar clock.
//!
//! Provides [`Rtc`], which reads and writes calendar time through a
//! [`RawCounterSource`]. Settings are converted fully before anything is
//! written, so a rejected setting leaves the counter untouched.

use crate::clock::CalendarClock;
use crate::counter::RawCounterSource;
use crate::packed::PackedTime;
use crate::timebase::Timebase;
use crate::types::{CalendarError, CalendarTime};

/// Calendar view of a hardware seconds counter.
///
/// # Type Parameters
/// * `C` - Counter source implementation type
pub struct Rtc<C: RawCounterSource> {
    counter: C,
    clock: CalendarClock,
}

impl<C: RawCounterSource> Rtc<C> {
    /// Creates a driver measuring `counter` from `timebase`.
    ///
    /// The counter value is left as is.
    pub fn new(counter: C, timebase: Timebase) -> Self {
        Self {
            counter,
            clock: CalendarClock::new(timebase),
        }
    }

    /// Creates a driver using the default 1 January 1980 timebase.
    pub fn with_default_timebase(counter: C) -> Self {
        Self::new(counter, Timebase::default())
    }

    /// Returns the current calendar time.
    pub fn now(&self) -> CalendarTime {
        self.clock.to_calendar(self.counter.read())
    }

    /// Sets the counter so that it reads as `time`.
    ///
    /// # Errors
    /// Any error from [`CalendarClock::to_raw`]; the counter is not written.
    pub fn set_time(&mut self, time: &CalendarTime) -> Result<(), CalendarError> {
        match self.clock.to_raw(time) {
            Ok(raw) => {
                self.set_raw(raw);
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("rejected time setting: {}", err);
                Err(err)
            }
        }
    }

    /// Returns the current time in packed form.
    ///
    /// # Errors
    /// * `Overflow` - More than 127 years have passed since the timebase year
    pub fn now_packed(&self) -> Result<PackedTime, CalendarError> {
        self.clock.pack(&self.now())
    }

    /// Sets the counter from a packed time.
    ///
    /// The restored time has even seconds.
    ///
    /// # Errors
    /// Any error from [`CalendarClock::unpack`] or [`CalendarClock::to_raw`];
    /// the counter is not written.
    pub fn set_time_packed(&mut self, packed: PackedTime) -> Result<(), CalendarError> {
        let time = self.clock.unpack(packed)?;
        self.set_time(&time)
    }

    /// Returns the raw counter value.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.counter.read()
    }

    /// Overwrites the raw counter value.
    pub fn set_raw(&mut self, value: u32) {
        #[cfg(feature = "defmt")]
        defmt::debug!("rtc counter set to {}", value);

        self.counter.write(value);
    }

    /// Returns the calendar clock used for conversions.
    #[inline]
    pub fn clock(&self) -> &CalendarClock {
        &self.clock
    }

    /// Re-anchors the driver at a new timebase.
    ///
    /// The counter keeps its value, so [`Rtc::now`] jumps accordingly.
    pub fn set_timebase(&mut self, timebase: Timebase) {
        #[cfg(feature = "defmt")]
        defmt::debug!("rtc timebase set to {}", timebase);

        self.clock.set_timebase(timebase);
    }

    /// Consumes the driver and returns the counter source.
    #[inline]
    pub fn release(self) -> C {
        self.counter
    }
}
