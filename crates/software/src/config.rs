//! Fixed tuning constants for the game.
//!
//! The game has no runtime configuration surface; everything a builder might want to tweak — how
//! forgiving the debounce is, how many touches lose the game, how fast the time budget shrinks —
//! lives here as a compile-time constant.

/// Heartbeat frequency of the game, in ticks per second.
///
/// Every timer in this crate counts in units of this tick. The display multiplexer alternates
/// devices every tick, so each device refreshes at half this rate.
pub const TICK_HZ: u16 = 100;

/// Number of sub-second units per whole second of the session clock. One unit elapses per tick.
pub const UNITS_PER_SECOND: u8 = 100;

/// How many ticks a detected wire touch stays latched.
///
/// While latched the speaker sounds continuously, the LED bar is forced to all-on, and further
/// contact bounce is ignored. 25 ticks is 250 ms at the 100 Hz heartbeat.
pub const TOUCH_LATCH_TICKS: u8 = 25;

/// Number of debounced touches that loses the game.
///
/// Also serves as the initial best score: a first win with any penalty below this ceiling counts
/// as a new high score.
pub const CONTACT_LIMIT: u8 = 10;

/// Initial value of the countdown timeout, which is also the all-on LED bar pattern.
///
/// The halving schedule walks it down 31 → 15 → 7 → 3 → 1; a crossing that finds it already at 1
/// ends the game.
pub const COUNTDOWN_START: u8 = 31;

/// All five LEDs of the ring lit. Forced onto the countdown display while a touch is latched.
pub const LED_ALL_ON: u8 = 0b1_1111;

/// Elapsed seconds at which the countdown timeout is halved for the first time.
pub const RAMP_FIRST_THRESHOLD_SECS: u16 = 30;

/// Seconds between consecutive halvings of the countdown timeout.
pub const RAMP_STEP_SECS: u16 = 30;
