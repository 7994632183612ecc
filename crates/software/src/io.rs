//! The seam between the game logic and the physical outputs.
//!
//! The game never touches a peripheral directly: every side effect of a tick goes through the
//! [`Board`] trait. The firmware implements it over PWM, GPIO, and the ADC arming flag; tests
//! implement it with a recorder so a simulated session can be checked effect by effect.

use crate::display::{DisplayDevice, Symbol};
use crate::melody::Pitch;

/// Output capabilities the game requires from the hardware.
pub trait Board {
    /// Sound a square wave at `pitch` until told otherwise.
    ///
    /// Playing [`Pitch::SILENCE`] is a no-op; a new pitch preempts any tone in progress. There is
    /// no queueing and no auto-stop — duration bookkeeping belongs to the caller.
    fn play_tone(&mut self, pitch: Pitch);

    /// Silence the tone output immediately.
    fn stop_tone(&mut self);

    /// Show `symbol` on `device`.
    ///
    /// Called for at most one device per tick; the tick handler alternates devices to multiplex
    /// the shared bus.
    fn render(&mut self, device: DisplayDevice, symbol: Symbol);

    /// Blank both display devices.
    fn clear_display(&mut self);

    /// Start (`true`) or stop (`false`) the continuous wire-contact conversion cycle.
    fn set_sensor_enabled(&mut self, enabled: bool);
}
