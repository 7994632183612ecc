//! Toggle-based latch decoupling the asynchronous button edge from the synchronous tick handler.

/// One-bit toggle plus a pressed flag, written by the edge context and consumed by the tick context.
///
/// The shared pin fires on every logic transition, so a press-and-release pair produces two edges:
/// the first flips the phase high and asserts the pressed flag, the second flips the phase back.
/// This yields exactly one pressed event per pair and shrugs off chatter on a single edge, but it is
/// deliberately not a full debounce — two edges landing within one tick period double-count, and the
/// ramp and melody timing are built around these exact semantics, so they are preserved as-is.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLatch {
    phase: bool,
    pressed: bool,
}

impl ButtonLatch {
    /// A latch with the phase low and no pending press.
    pub const fn new() -> Self {
        Self {
            phase: false,
            pressed: false,
        }
    }

    /// Record one edge of the shared pin. Called from the edge context only.
    pub fn on_edge(&mut self) {
        self.phase = !self.phase;
        if self.phase {
            self.pressed = true;
        }
    }

    /// Whether the toggle phase currently reads as "button held down".
    pub fn is_held(self) -> bool {
        self.phase
    }

    /// Consume the pending pressed event, if any. Called from the tick context only.
    pub fn take_pressed(&mut self) -> bool {
        core::mem::take(&mut self.pressed)
    }

    /// Drop both the phase and any pending press, re-syncing the latch to a released button.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
