//! Two-level software clock: 100 Hz units rolling into whole seconds.

use crate::config::UNITS_PER_SECOND;

/// Session clock advanced exclusively by the periodic tick.
///
/// Both counters move by exactly one per tick with no batching, so consumers comparing against them
/// with `==` (the melody sequencer, the countdown ramp) can never skip their matching value.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionClock {
    units: u8,
    seconds: u16,
}

impl SessionClock {
    /// A clock at zero.
    pub const fn new() -> Self {
        Self {
            units: 0,
            seconds: 0,
        }
    }

    /// Advance one tick. Returns `true` when a whole second has just elapsed.
    pub fn tick(&mut self) -> bool {
        self.units += 1;
        if self.units == UNITS_PER_SECOND {
            self.units = 0;
            self.seconds += 1;
            true
        } else {
            false
        }
    }

    /// Sub-second unit counter, 0..100. Its parity drives the display multiplexer.
    pub fn units(self) -> u8 {
        self.units
    }

    /// Whole seconds elapsed since the session started.
    pub fn seconds(self) -> u16 {
        self.seconds
    }

    /// Restart the clock from zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_second_is_exactly_one_hundred_units() {
        let mut clock = SessionClock::new();
        for _ in 0..99 {
            assert!(!clock.tick());
        }
        assert!(clock.tick(), "hundredth tick rolls into a second");
        assert_eq!(1, clock.seconds());
        assert_eq!(0, clock.units());
    }

    #[test]
    fn seconds_accumulate_monotonically() {
        let mut clock = SessionClock::new();
        for _ in 0..(3 * UNITS_PER_SECOND as u32 + 7) {
            clock.tick();
        }
        assert_eq!(3, clock.seconds());
        assert_eq!(7, clock.units());
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut clock = SessionClock::new();
        for _ in 0..250 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(0, clock.seconds());
        assert_eq!(0, clock.units());
    }
}
