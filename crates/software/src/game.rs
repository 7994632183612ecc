//! The finite-state machine orchestrating the game.
//!
//! [`Game`] owns every piece of session state and is driven from exactly two places: the periodic
//! tick context calls [`Game::tick`] at 100 Hz, and the edge-interrupt context calls
//! [`Game::on_button_edge`] whenever the shared wake/start/confirm pin changes level. Each field has
//! a single writer per context; the game state itself is the one exception, and the edge context's
//! only transition (sleep → init) is idempotent and disjoint from every transition the tick context
//! performs, so the two can never race each other onto different states.

pub mod button;
pub mod clock;
pub mod countdown;
pub mod touch;

use crate::config::CONTACT_LIMIT;
use crate::display::{DisplayDevice, Symbol};
use crate::io::Board;
use crate::melody::{self, MelodySequencer, MelodyStep, Note};
use button::ButtonLatch;
use clock::SessionClock;
use countdown::{CountdownRamp, RampEvent};
use touch::{TouchEvent, TouchFilter};

/// The states of the game. Exactly one is live at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Idle with all session state reset; the firmware parks the processor here.
    Sleep,
    /// Arms the contact sensor, then moves on unconditionally.
    Init,
    /// Shows the best score and plays the starting melody while the button is held.
    Ready,
    /// The round proper: the main timing loop.
    Play,
    /// The player signalled they made it across.
    Win,
    /// Too many contacts, or the time budget ran out.
    Lose,
}

/// The complete game: state machine plus all session and lifetime variables.
pub struct Game {
    state: GameState,
    contacts: u8,
    best_score: u8,
    outcome: Symbol,
    clock: SessionClock,
    countdown: CountdownRamp,
    touch: TouchFilter,
    button: ButtonLatch,
    melody: MelodySequencer,
}

impl Game {
    /// A freshly powered-on game, asleep with the documented initial constants.
    pub const fn new() -> Self {
        Self {
            state: GameState::Sleep,
            contacts: 0,
            best_score: CONTACT_LIMIT,
            outcome: Symbol::Blank,
            clock: SessionClock::new(),
            countdown: CountdownRamp::new(),
            touch: TouchFilter::new(),
            button: ButtonLatch::new(),
            melody: MelodySequencer::idle(),
        }
    }

    /// The state the machine is currently in.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Debounced wire touches in the current round.
    pub fn contacts(&self) -> u8 {
        self.contacts
    }

    /// Lowest penalty count that ever won a round this power cycle.
    pub fn best_score(&self) -> u8 {
        self.best_score
    }

    /// Record one edge of the wake/button pin. Runs in the edge-interrupt context.
    ///
    /// Returns `true` when the edge woke the game out of sleep. Waking is this context's only
    /// state transition; everything else is left to the tick context.
    pub fn on_button_edge(&mut self) -> bool {
        let woke = self.state == GameState::Sleep;
        if woke {
            self.state = GameState::Init;
        }
        self.button.on_edge();
        woke
    }

    /// Advance the game by one tick. Runs in the periodic timer context.
    ///
    /// `touching` is the latest raw sample from the contact sensor (`true` = wire touched);
    /// all hardware effects of the tick go out through `board`.
    pub fn tick(&mut self, touching: bool, board: &mut impl Board) {
        match self.state {
            GameState::Sleep => {}
            GameState::Init => self.tick_init(board),
            GameState::Ready => self.tick_ready(board),
            GameState::Play => self.tick_play(touching, board),
            GameState::Win | GameState::Lose => self.tick_outcome(board),
        }
    }

    fn tick_init(&mut self, board: &mut impl Board) {
        self.reset_session();
        board.set_sensor_enabled(true);
        // The wake press stays latched: holding the button from wake straight through
        // ready is what starts the round.
        self.melody.start(melody::READY);
        self.state = GameState::Ready;
    }

    fn tick_ready(&mut self, board: &mut impl Board) {
        self.clock.tick();
        self.multiplex(board, Symbol::Blank, Symbol::Digit(self.best_score % 16));

        if !self.button.is_held() {
            // melody is gated on the held button; pause and go quiet until it returns
            board.stop_tone();
            return;
        }

        match self.melody.tick() {
            MelodyStep::Start(note) => self.sound(board, note),
            MelodyStep::Sustain => {}
            MelodyStep::Finished => {
                board.stop_tone();
                self.enter_play();
            }
        }
    }

    fn tick_play(&mut self, touching: bool, board: &mut impl Board) {
        // manual "I made it" signal
        if self.button.take_pressed() {
            board.stop_tone();
            self.enter_win();
            return;
        }

        match self.touch.poll(touching) {
            TouchEvent::Started => {
                self.contacts = self.contacts.saturating_add(1);
                self.countdown.hold_all_on();
                board.play_tone(melody::CONTACT_TONE);
            }
            TouchEvent::Ended => {
                board.stop_tone();
                self.countdown.release();
                if self.contacts >= CONTACT_LIMIT {
                    self.enter_lose();
                    return;
                }
            }
            TouchEvent::None => {}
        }

        if self.clock.tick() {
            match self.countdown.on_second(self.clock.seconds()) {
                RampEvent::OutOfTime => {
                    board.stop_tone();
                    self.enter_lose();
                    return;
                }
                RampEvent::Halved | RampEvent::None => {}
            }
        }

        self.multiplex(
            board,
            Symbol::Meter(self.countdown.displayed()),
            Symbol::Digit(self.contacts % 16),
        );
    }

    fn tick_outcome(&mut self, board: &mut impl Board) {
        self.clock.tick();
        self.multiplex(board, self.outcome, self.outcome);

        match self.melody.tick() {
            MelodyStep::Start(note) => self.sound(board, note),
            MelodyStep::Sustain => {}
            MelodyStep::Finished => {
                board.stop_tone();
                self.enter_sleep(board);
            }
        }
    }

    /// Alternate the two devices every tick: each gets a ~50% duty cycle at half the tick rate,
    /// flicker-free at 100 Hz.
    fn multiplex(&self, board: &mut impl Board, ring: Symbol, digit: Symbol) {
        if self.clock.units() % 2 == 0 {
            board.render(DisplayDevice::LedRing, ring);
        } else {
            board.render(DisplayDevice::SevenSegment, digit);
        }
    }

    fn sound(&self, board: &mut impl Board, note: Note) {
        if note.pitch.is_silence() {
            board.stop_tone();
        } else {
            board.play_tone(note.pitch);
        }
    }

    fn enter_play(&mut self) {
        self.clock.reset();
        self.touch.reset();
        self.melody = MelodySequencer::idle();
        // the press that started the round must not instantly win it
        self.button.take_pressed();
        self.state = GameState::Play;
    }

    fn enter_win(&mut self) {
        // first-entry evaluation: only a strictly lower penalty count sets a new best
        if self.contacts < self.best_score {
            self.best_score = self.contacts;
            self.outcome = Symbol::HighScore;
        } else {
            self.outcome = Symbol::Win;
        }
        self.melody.start(melody::WIN);
        self.state = GameState::Win;
    }

    fn enter_lose(&mut self) {
        self.outcome = Symbol::Lose;
        self.melody.start(melody::LOSE);
        self.state = GameState::Lose;
    }

    fn enter_sleep(&mut self, board: &mut impl Board) {
        board.stop_tone();
        board.clear_display();
        board.set_sensor_enabled(false);
        self.reset_session();
        self.button.reset();
        self.melody = MelodySequencer::idle();
        self.state = GameState::Sleep;
    }

    fn reset_session(&mut self) {
        self.contacts = 0;
        self.outcome = Symbol::Blank;
        self.clock.reset();
        self.countdown.reset();
        self.touch.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
