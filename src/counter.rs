//! Raw seconds counter abstraction.

/// Trait for abstracting the hardware seconds counter.
///
/// Implement this for your RTC peripheral. The counter advances by one every
/// second on its own; the calendar engine only reads and writes it.
/// Implementations must make both operations atomic with respect to the
/// hardware's own updates (e.g. wait for register synchronisation).
pub trait RawCounterSource {
    /// Returns the current counter value in seconds since the timebase.
    fn read(&self) -> u32;

    /// Overwrites the counter value.
    fn write(&mut self, value: u32);
}
