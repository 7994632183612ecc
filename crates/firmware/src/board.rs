//! The hardware implementation of the game's output seam.

use buzzwire_lib::display::{DisplayDevice, Symbol};
use buzzwire_lib::io::Board;
use buzzwire_lib::melody::Pitch;

use crate::buzzer::Buzzer;
use crate::display::{LedRing, SevenSegment};
use crate::sensor::SensorArmSender;

/// All output peripherals of the game, bundled for the tick context.
///
/// The game logic calls through [`Board`]; everything here resolves to a register write or a
/// `Watch` send, so a whole tick stays far inside one 10 ms period.
pub struct BuzzWireBoard {
    buzzer: Buzzer,
    ring: LedRing,
    digit: SevenSegment,
    sensor_arm: SensorArmSender<'static>,
}

impl BuzzWireBoard {
    /// Bundle the initialized output drivers.
    pub fn new(
        buzzer: Buzzer,
        ring: LedRing,
        digit: SevenSegment,
        sensor_arm: SensorArmSender<'static>,
    ) -> Self {
        Self {
            buzzer,
            ring,
            digit,
            sensor_arm,
        }
    }
}

impl Board for BuzzWireBoard {
    fn play_tone(&mut self, pitch: Pitch) {
        self.buzzer.play(pitch);
    }

    fn stop_tone(&mut self) {
        self.buzzer.stop();
    }

    fn render(&mut self, device: DisplayDevice, symbol: Symbol) {
        match device {
            DisplayDevice::LedRing => self.ring.show(symbol),
            DisplayDevice::SevenSegment => self.digit.show(symbol),
        }
    }

    fn clear_display(&mut self) {
        self.ring.show(Symbol::Blank);
        self.digit.show(Symbol::Blank);
    }

    fn set_sensor_enabled(&mut self, enabled: bool) {
        self.sensor_arm.send(enabled);
    }
}
