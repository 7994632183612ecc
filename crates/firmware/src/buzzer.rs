//! Square-wave tone output for the piezo speaker.

use buzzwire_lib::melody::Pitch;
use embassy_stm32::peripherals::TIM3;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::Channel;
use embassy_stm32::timer::simple_pwm::SimplePwm;

/// Timebase the note table's reload values are expressed against: reload = 1 MHz / frequency.
const PITCH_TIMEBASE_HZ: u32 = 1_000_000;

/// Piezo speaker on TIM3 channel 1, driven as a 50% duty PWM at audio frequencies.
///
/// The buzzer has no duration bookkeeping of its own: a pitch sounds until the next
/// [`play`][Self::play] preempts it or [`stop`][Self::stop] silences it.
pub struct Buzzer {
    pwm: SimplePwm<'static, TIM3>,
}

impl Buzzer {
    /// Wrap the PWM timer, starting silent.
    pub fn new(mut pwm: SimplePwm<'static, TIM3>) -> Self {
        pwm.channel(Channel::Ch1).disable();
        Self { pwm }
    }

    /// Sound a square wave at `pitch`. The reserved silence pitch is a no-op.
    pub fn play(&mut self, pitch: Pitch) {
        if pitch.is_silence() {
            return;
        }
        self.pwm
            .set_frequency(Hertz::hz(PITCH_TIMEBASE_HZ / u32::from(pitch.reload())));
        let mut channel = self.pwm.channel(Channel::Ch1);
        channel.set_duty_cycle_fraction(1, 2);
        channel.enable();
    }

    /// Silence the output immediately.
    pub fn stop(&mut self) {
        self.pwm.channel(Channel::Ch1).disable();
    }
}
