//! The symbol set the game can show and its mapping onto the two output devices.
//!
//! The hardware drives a five-LED ring and a single 7-segment digit off one multiplexed bus, so the
//! game never talks in raw bit patterns: it renders a [`Symbol`] to a [`DisplayDevice`] and the glyph
//! tables here decide which segments or LEDs light up. Codes a device cannot express fall back to a
//! defined default glyph rather than failing — the player is the only observer this system has.

use crate::config::LED_ALL_ON;

/// The two time-multiplexed output devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayDevice {
    /// Five-LED ring showing the remaining time budget as a bar.
    LedRing,
    /// Single 7-segment digit showing scores and outcome glyphs.
    SevenSegment,
}

/// Everything the game ever asks a display to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// A hex digit, 0 through 15. Values above 15 render as the default glyph.
    Digit(u8),
    /// A 0..=31 level bar, used by the LED ring for the countdown timeout.
    Meter(u8),
    /// Victory glyph.
    Win,
    /// New-best-score glyph.
    HighScore,
    /// Defeat glyph.
    Lose,
    /// All outputs dark.
    Blank,
}

/// Segment masks for hex digits, bit 0 = segment a through bit 6 = segment g.
const DIGIT_GLYPHS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];

/// Glyph shown for symbol codes the 7-segment digit cannot express: the zero glyph.
const DEFAULT_GLYPH: u8 = DIGIT_GLYPHS[0];

const GLYPH_WIN: u8 = 0x3E; // "U"-shaped cup
const GLYPH_HIGHSCORE: u8 = 0x76; // "H"
const GLYPH_LOSE: u8 = 0x38; // "L"

impl Symbol {
    /// Segment mask for the 7-segment digit, bit 0 = segment a through bit 6 = segment g.
    ///
    /// Symbols the digit cannot express (including out-of-range digit values and the ring's meter
    /// bar) render as the default glyph, never as an error.
    pub fn segments(self) -> u8 {
        match self {
            Symbol::Digit(n) if (n as usize) < DIGIT_GLYPHS.len() => DIGIT_GLYPHS[n as usize],
            Symbol::Digit(_) | Symbol::Meter(_) => DEFAULT_GLYPH,
            Symbol::Win => GLYPH_WIN,
            Symbol::HighScore => GLYPH_HIGHSCORE,
            Symbol::Lose => GLYPH_LOSE,
            Symbol::Blank => 0,
        }
    }

    /// Five-bit pattern for the LED ring, bit 0 = first LED.
    ///
    /// Digits and meter levels show their low five bits directly; the celebratory glyphs light the
    /// whole ring, everything else goes dark.
    pub fn led_bits(self) -> u8 {
        match self {
            Symbol::Digit(n) | Symbol::Meter(n) => n & LED_ALL_ON,
            Symbol::Win | Symbol::HighScore => LED_ALL_ON,
            Symbol::Lose | Symbol::Blank => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hex_digit_has_a_distinct_glyph() {
        for a in 0..16u8 {
            for b in (a + 1)..16u8 {
                assert_ne!(
                    Symbol::Digit(a).segments(),
                    Symbol::Digit(b).segments(),
                    "digits {} and {} share a glyph",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn out_of_range_digit_falls_back_to_default() {
        assert_eq!(DEFAULT_GLYPH, Symbol::Digit(42).segments());
        assert_eq!(DEFAULT_GLYPH, Symbol::Meter(31).segments());
    }

    #[test]
    fn blank_is_dark_on_both_devices() {
        assert_eq!(0, Symbol::Blank.segments());
        assert_eq!(0, Symbol::Blank.led_bits());
    }

    #[test]
    fn meter_maps_straight_onto_the_ring() {
        assert_eq!(0b1_1111, Symbol::Meter(31).led_bits());
        assert_eq!(0b0_0111, Symbol::Meter(7).led_bits());
        // levels wider than the ring are truncated to its five bits
        assert_eq!(0b0_0001, Symbol::Meter(33).led_bits());
    }

    #[test]
    fn outcome_glyphs_light_the_ring_appropriately() {
        assert_eq!(LED_ALL_ON, Symbol::Win.led_bits());
        assert_eq!(LED_ALL_ON, Symbol::HighScore.led_bits());
        assert_eq!(0, Symbol::Lose.led_bits());
    }
}
