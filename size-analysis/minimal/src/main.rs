#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtc_calendar::{CalendarTime, PackedTime, RawCounterSource, Rtc, Timebase, Weekday};

// ============================================================================
// Minimal Counter Implementation
// ============================================================================

/// Counter backed by a plain word, standing in for the RTC_CNT registers
pub struct MinimalCounter(u32);

impl RawCounterSource for MinimalCounter {
    fn read(&self) -> u32 {
        core::hint::black_box(self.0)
    }

    fn write(&mut self, value: u32) {
        self.0 = core::hint::black_box(value);
    }
}

// ============================================================================
// Conversions
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_conversions() {
    let counter = MinimalCounter(core::hint::black_box(0));
    let mut rtc = Rtc::with_default_timebase(counter);

    // Forward and reverse conversion
    let now = rtc.now();
    let _ = rtc.set_time(&CalendarTime { hour: 12, ..now });
    core::hint::black_box(rtc.now());

    // Packed codec
    if let Ok(packed) = rtc.now_packed() {
        let _ = rtc.set_time_packed(PackedTime::from(core::hint::black_box(u32::from(packed))));
    }

    // Timebase validation
    let custom = CalendarTime::new(2000, 1, 1, Weekday::Saturday, 0, 0, 0);
    if let Ok(timebase) = Timebase::new(core::hint::black_box(custom)) {
        rtc.set_timebase(timebase);
    }

    core::hint::black_box(rtc.release());
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_conversions();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
