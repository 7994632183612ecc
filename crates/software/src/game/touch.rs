//! Debounce latch turning the raw wire-contact condition into discrete penalty events.

use crate::config::TOUCH_LATCH_TICKS;

/// What the filter observed on this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// Nothing changed.
    None,
    /// A fresh contact was detected; feedback should start and the penalty counts.
    Started,
    /// The latch window expired; feedback should stop and the filter is re-armed.
    Ended,
}

/// Latches a detected contact for a fixed tick count, absorbing bounce.
///
/// While the latch runs, further contact is ignored entirely — the 100 Hz tick would otherwise
/// count a single scrape of the wire many times over.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchFilter {
    remaining: u8,
}

impl TouchFilter {
    /// An idle, armed filter.
    pub const fn new() -> Self {
        Self { remaining: 0 }
    }

    /// Feed one tick's sampled contact condition through the filter.
    pub fn poll(&mut self, touching: bool) -> TouchEvent {
        if self.remaining == 0 {
            if touching {
                self.remaining = TOUCH_LATCH_TICKS;
                TouchEvent::Started
            } else {
                TouchEvent::None
            }
        } else {
            self.remaining -= 1;
            if self.remaining == 0 {
                TouchEvent::Ended
            } else {
                TouchEvent::None
            }
        }
    }

    /// Whether a contact is currently latched.
    pub fn is_latched(self) -> bool {
        self.remaining > 0
    }

    /// Drop any running latch and re-arm.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
