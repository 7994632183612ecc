//! GPIO drivers for the two display devices.
//!
//! The glyph and bar patterns come from `buzzwire_lib`; this module only moves their bits onto
//! pins. The game's tick handler alternates which device it refreshes, so neither driver needs to
//! know about the multiplexing.

use buzzwire_lib::display::Symbol;
use embassy_stm32::gpio::{Level, Output};

/// Single 7-segment digit, segments a through g on seven push-pull outputs.
pub struct SevenSegment {
    /// Segment outputs in a..=g order, matching bit 0..=6 of a glyph mask.
    segments: [Output<'static>; 7],
}

impl SevenSegment {
    /// Wrap the segment outputs, starting blank.
    pub fn new(segments: [Output<'static>; 7]) -> Self {
        let mut display = Self { segments };
        display.show(Symbol::Blank);
        display
    }

    /// Light the segments for `symbol`'s glyph.
    pub fn show(&mut self, symbol: Symbol) {
        let mask = symbol.segments();
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            segment.set_level(Level::from((mask >> bit) & 1 != 0));
        }
    }
}

/// Five-LED ring showing the countdown bar.
pub struct LedRing {
    /// LED outputs in bar order, bit 0 of a pattern first.
    leds: [Output<'static>; 5],
}

impl LedRing {
    /// Wrap the LED outputs, starting dark.
    pub fn new(leds: [Output<'static>; 5]) -> Self {
        let mut ring = Self { leds };
        ring.show(Symbol::Blank);
        ring
    }

    /// Light the ring pattern for `symbol`.
    pub fn show(&mut self, symbol: Symbol) {
        let bits = symbol.led_bits();
        for (bit, led) in self.leds.iter_mut().enumerate() {
            led.set_level(Level::from((bits >> bit) & 1 != 0));
        }
    }
}
