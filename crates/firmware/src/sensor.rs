//! Continuous sampling of the wire-contact circuit.
//!
//! The wire rests high through a pull-up and is yanked to ground the instant the player's loop
//! touches it, so a conversion result of zero means "touching". This task only publishes that
//! binary condition; debouncing and rate limiting belong to the game's tick handler.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_stm32::Peri;
use embassy_stm32::adc::Adc;
use embassy_stm32::peripherals::{ADC1, PA3};
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    watch::{Receiver, Sender, Watch},
};
use embassy_time::Timer;

/// Latest raw contact condition, written here and read by the game tick.
static TOUCHING: AtomicBool = AtomicBool::new(false);

/// Pause between completed conversions. Far faster than the 100 Hz tick that consumes the result.
const SAMPLE_PERIOD_US: u64 = 500;

const SENSOR_ARM_RECEIVER_CNT: usize = 1;
/// Syncs the armed flag from the game (init arms, sleep disarms) to the sampling task.
pub static SENSOR_ARM_SYNC: Watch<CriticalSectionRawMutex, bool, SENSOR_ARM_RECEIVER_CNT> =
    Watch::new_with(false);
/// Sender half of [`SENSOR_ARM_SYNC`].
pub type SensorArmSender<'a> = Sender<'a, CriticalSectionRawMutex, bool, SENSOR_ARM_RECEIVER_CNT>;
/// Receiver half of [`SENSOR_ARM_SYNC`].
pub type SensorArmReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, bool, SENSOR_ARM_RECEIVER_CNT>;

/// Whether the latest sample saw the wire touched.
pub fn is_touching() -> bool {
    TOUCHING.load(Ordering::Relaxed)
}

/// Task running the sample-and-report cycle: each completed conversion immediately requests the
/// next, for as long as the game keeps the sensor armed.
#[embassy_executor::task]
pub async fn sample_wire(
    mut adc: Adc<'static, ADC1>,
    mut wire: Peri<'static, PA3>,
    mut armed: SensorArmReceiver<'static>,
) -> ! {
    loop {
        if !armed.try_get().unwrap_or(false) {
            TOUCHING.store(false, Ordering::Relaxed);
            armed.changed().await;
            continue;
        }

        let sample = adc.blocking_read(&mut wire);
        TOUCHING.store(sample == 0, Ordering::Relaxed);
        Timer::after_micros(SAMPLE_PERIOD_US).await;
    }
}
