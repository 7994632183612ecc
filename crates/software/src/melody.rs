//! Pitches, note tables, and the sequencer that walks a melody one tick at a time.
//!
//! A melody is a fixed ordered slice of [`Note`]s played exactly once per entry into the ready, win,
//! or lose states. The tone generator itself never auto-stops; duration bookkeeping lives entirely in
//! the [`MelodySequencer`], which tells its caller when to start a note and when the melody is over.

/// A pitch, expressed as a timer-reload value for a 1 MHz timebase (reload = 1 MHz / frequency).
///
/// The reserved value [`Pitch::SILENCE`] produces no sound; the tone generator treats playing it as a
/// no-op, so rests are implemented by the sequencer's caller issuing a stop instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pitch(u16);

impl Pitch {
    /// The reserved "no sound" pitch.
    pub const SILENCE: Pitch = Pitch(0);

    /// A pitch from its timer-reload value.
    pub const fn new(reload: u16) -> Self {
        Self(reload)
    }

    /// The timer-reload value, for the hardware tone generator.
    pub fn reload(self) -> u16 {
        self.0
    }

    /// Whether this is the reserved silence value.
    pub fn is_silence(self) -> bool {
        self == Self::SILENCE
    }
}

/// C5, 523 Hz.
pub const C5: Pitch = Pitch::new(1911);
/// D5, 587 Hz.
pub const D5: Pitch = Pitch::new(1703);
/// E5, 659 Hz.
pub const E5: Pitch = Pitch::new(1517);
/// G5, 784 Hz.
pub const G5: Pitch = Pitch::new(1276);
/// A5, 880 Hz.
pub const A5: Pitch = Pitch::new(1136);
/// C6, 1047 Hz.
pub const C6: Pitch = Pitch::new(955);

/// Continuous buzz sounded for as long as a wire touch stays latched, 262 Hz.
pub const CONTACT_TONE: Pitch = Pitch::new(3822);

/// One melody entry: a pitch held for a fixed number of ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// What to sound, or [`Pitch::SILENCE`] for a rest.
    pub pitch: Pitch,
    /// How many ticks the note lasts. Must be at least 1.
    pub ticks: u16,
}

const fn note(pitch: Pitch, ticks: u16) -> Note {
    Note { pitch, ticks }
}

/// An ordered, fixed sequence of notes played once per state entry.
pub type Melody = &'static [Note];

/// Rising arpeggio played while the player holds the button down to start a round.
pub const READY: Melody = &[
    note(C5, 30),
    note(E5, 30),
    note(G5, 30),
    note(C6, 45),
    note(Pitch::SILENCE, 15),
];

/// Short fanfare for a win.
pub const WIN: Melody = &[note(G5, 15), note(A5, 15), note(C6, 40)];

/// Descending figure for a loss.
pub const LOSE: Melody = &[note(E5, 20), note(D5, 20), note(C5, 40)];

/// What the sequencer asks its caller to do on a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MelodyStep {
    /// A new note begins this tick: sound its pitch (or silence the output for a rest).
    Start(Note),
    /// The current note keeps sounding; nothing to do.
    Sustain,
    /// The last note has run its full duration. The caller must silence the output.
    Finished,
}

/// Walks a [`Melody`] one note per exact tick-count match.
///
/// Counters advance monotonically by one per tick, so the equality comparisons against each note's
/// duration can never skip their matching value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MelodySequencer {
    notes: Melody,
    index: usize,
    ticks_into_note: u16,
}

impl MelodySequencer {
    /// A sequencer that is already finished; call [`start`][Self::start] to arm it.
    pub const fn idle() -> Self {
        Self {
            notes: &[],
            index: 0,
            ticks_into_note: 0,
        }
    }

    /// Arm the sequencer at the first note of `melody`.
    pub fn start(&mut self, melody: Melody) {
        self.notes = melody;
        self.index = 0;
        self.ticks_into_note = 0;
    }

    /// Advance by one tick.
    ///
    /// Returns [`MelodyStep::Start`] on the first tick of each note and [`MelodyStep::Finished`] on
    /// every tick after the last note has completed.
    pub fn tick(&mut self) -> MelodyStep {
        let Some(current) = self.notes.get(self.index) else {
            return MelodyStep::Finished;
        };

        let step = if self.ticks_into_note == 0 {
            MelodyStep::Start(*current)
        } else {
            MelodyStep::Sustain
        };

        self.ticks_into_note += 1;
        if self.ticks_into_note == current.ticks {
            self.index += 1;
            self.ticks_into_note = 0;
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Melody = &[note(C5, 2), note(Pitch::SILENCE, 1), note(G5, 3)];

    fn run(seq: &mut MelodySequencer, ticks: usize) -> impl Iterator<Item = MelodyStep> {
        let mut steps = [MelodyStep::Finished; 16];
        for slot in steps.iter_mut().take(ticks) {
            *slot = seq.tick();
        }
        steps.into_iter().take(ticks)
    }

    #[test]
    fn emits_each_note_start_exactly_once() {
        let mut seq = MelodySequencer::idle();
        seq.start(SHORT);

        let starts = run(&mut seq, 6)
            .filter(|s| matches!(s, MelodyStep::Start(_)))
            .count();
        assert_eq!(SHORT.len(), starts, "one start per note");
    }

    #[test]
    fn finishes_only_after_the_full_duration() {
        let mut seq = MelodySequencer::idle();
        seq.start(SHORT);

        // total duration is 2 + 1 + 3 = 6 ticks
        for tick in 0..6 {
            assert_ne!(MelodyStep::Finished, seq.tick(), "finished early at tick {}", tick);
        }
        assert_eq!(MelodyStep::Finished, seq.tick());
        assert_eq!(MelodyStep::Finished, seq.tick(), "finished is terminal");
    }

    #[test]
    fn identical_tick_sequences_produce_identical_steps() {
        let mut a = MelodySequencer::idle();
        let mut b = MelodySequencer::idle();
        a.start(READY);
        b.start(READY);

        for tick in 0..200 {
            assert_eq!(a.tick(), b.tick(), "diverged at tick {}", tick);
        }
    }

    #[test]
    fn restart_replays_from_the_beginning() {
        let mut seq = MelodySequencer::idle();
        seq.start(SHORT);
        let _ = run(&mut seq, 7);

        seq.start(SHORT);
        assert_eq!(MelodyStep::Start(SHORT[0]), seq.tick());
    }

    #[test]
    fn idle_sequencer_is_finished() {
        let mut seq = MelodySequencer::idle();
        assert_eq!(MelodyStep::Finished, seq.tick());
    }

    #[test]
    fn state_melodies_end_by_going_quiet() {
        // Win and lose hand the output straight to a stop call; ready must not leave a tone
        // hanging while the game switches to play, so its last entry is an explicit rest.
        assert!(READY.last().unwrap().pitch.is_silence());
        for melody in [READY, WIN, LOSE] {
            assert!(!melody.is_empty());
            assert!(melody.iter().all(|n| n.ticks > 0), "zero-length note");
        }
    }
}
