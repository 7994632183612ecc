//! The halving schedule that shrinks the player's time budget as a round drags on.

use crate::config::{COUNTDOWN_START, LED_ALL_ON, RAMP_FIRST_THRESHOLD_SECS, RAMP_STEP_SECS};

/// Outcome of feeding a completed second into the ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampEvent {
    /// The second did not land on a threshold.
    None,
    /// A threshold was crossed and the timeout was halved.
    Halved,
    /// A threshold was crossed with the timeout already at 1: the round is over.
    OutOfTime,
}

/// Countdown timeout plus the threshold schedule that halves it.
///
/// Every time the session clock reaches the current threshold, the threshold advances by a fixed
/// step and the timeout is halved (integer division, truncating): 31 → 15 → 7 → 3 → 1. A crossing
/// that finds the timeout already at 1 reports [`RampEvent::OutOfTime`]; the timeout is checked
/// before use and can never silently degenerate to zero.
///
/// While a touch is latched the *displayed* timeout is forced to the all-on bar and the real value
/// is parked aside; a crossing that lands inside the latch window halves the parked value, so the
/// ramp never operates on the forced display pattern.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownRamp {
    timeout: u8,
    threshold: u16,
    parked: Option<u8>,
}

impl CountdownRamp {
    /// A ramp at its initial ceiling with the first threshold armed.
    pub const fn new() -> Self {
        Self {
            timeout: COUNTDOWN_START,
            threshold: RAMP_FIRST_THRESHOLD_SECS,
            parked: None,
        }
    }

    /// The value the LED bar should show right now (the all-on pattern while a touch is latched).
    pub fn displayed(self) -> u8 {
        self.timeout
    }

    /// Force the display to the all-on bar, parking the real timeout. Idempotent.
    pub fn hold_all_on(&mut self) {
        if self.parked.is_none() {
            self.parked = Some(self.timeout);
            self.timeout = LED_ALL_ON;
        }
    }

    /// Restore the parked timeout after the touch latch expires.
    pub fn release(&mut self) {
        if let Some(timeout) = self.parked.take() {
            self.timeout = timeout;
        }
    }

    /// Feed a completed second into the ramp.
    pub fn on_second(&mut self, seconds: u16) -> RampEvent {
        if seconds != self.threshold {
            return RampEvent::None;
        }

        let timeout = self.parked.as_mut().unwrap_or(&mut self.timeout);
        if *timeout == 1 {
            return RampEvent::OutOfTime;
        }
        *timeout /= 2;
        self.threshold += RAMP_STEP_SECS;
        RampEvent::Halved
    }

    /// Back to the initial ceiling and first threshold.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for CountdownRamp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run `seconds` whole seconds through the ramp, returning the first terminal event.
    fn run_seconds(ramp: &mut CountdownRamp, seconds: u16) -> RampEvent {
        for s in 1..=seconds {
            if ramp.on_second(s) == RampEvent::OutOfTime {
                return RampEvent::OutOfTime;
            }
        }
        RampEvent::None
    }

    #[test]
    fn halves_exactly_once_per_crossing() {
        let mut ramp = CountdownRamp::new();
        let mut halvings = 0;
        for s in 1..=(4 * RAMP_STEP_SECS) {
            if ramp.on_second(s) == RampEvent::Halved {
                halvings += 1;
            }
        }
        assert_eq!(4, halvings);
        assert_eq!(1, ramp.displayed(), "31 halves down to 1 in four steps");
    }

    #[test]
    fn timeout_is_non_increasing() {
        let mut ramp = CountdownRamp::new();
        let mut previous = ramp.displayed();
        for s in 1..=(5 * RAMP_STEP_SECS) {
            if ramp.on_second(s) == RampEvent::OutOfTime {
                break;
            }
            assert!(ramp.displayed() <= previous);
            previous = ramp.displayed();
        }
    }

    #[test]
    fn fifth_crossing_runs_out_of_time() {
        let mut ramp = CountdownRamp::new();
        assert_eq!(RampEvent::None, run_seconds(&mut ramp, 4 * RAMP_STEP_SECS));
        assert_eq!(1, ramp.displayed());
        assert_eq!(RampEvent::OutOfTime, ramp.on_second(5 * RAMP_STEP_SECS));
        assert_eq!(1, ramp.displayed(), "timeout never reaches zero");
    }

    #[test]
    fn hold_forces_all_on_and_release_restores() {
        let mut ramp = CountdownRamp::new();
        run_seconds(&mut ramp, RAMP_FIRST_THRESHOLD_SECS);
        assert_eq!(15, ramp.displayed());

        ramp.hold_all_on();
        ramp.hold_all_on(); // idempotent
        assert_eq!(LED_ALL_ON, ramp.displayed());

        ramp.release();
        assert_eq!(15, ramp.displayed());
    }

    #[test]
    fn crossing_during_hold_halves_the_parked_value() {
        let mut ramp = CountdownRamp::new();
        ramp.hold_all_on();
        assert_eq!(RampEvent::Halved, ramp.on_second(RAMP_FIRST_THRESHOLD_SECS));
        assert_eq!(LED_ALL_ON, ramp.displayed(), "display stays forced");
        ramp.release();
        assert_eq!(15, ramp.displayed());
    }

    #[test]
    fn reset_restores_the_ceiling() {
        let mut ramp = CountdownRamp::new();
        run_seconds(&mut ramp, 2 * RAMP_STEP_SECS);
        ramp.reset();
        assert_eq!(COUNTDOWN_START, ramp.displayed());
        assert_eq!(
            RampEvent::Halved,
            ramp.on_second(RAMP_FIRST_THRESHOLD_SECS),
            "threshold re-armed at the first step"
        );
    }
}
