//! The single wake/start/confirm input.
//!
//! One pin carries all three meanings; the game's toggle latch sorts them out. This task only
//! forwards raw edges into a channel so the edge context stays minimal and non-blocking.

use defmt::warn;
use embassy_stm32::exti::ExtiInput;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

/// Pending pin edges, drained by the game task.
///
/// Depth 8 absorbs a burst of contact chatter between two ticks. An overflowing burst loses
/// edges, which can flip the toggle latch's phase; the latch re-syncs on the next sleep entry.
pub static EDGES: Channel<CriticalSectionRawMutex, (), 8> = Channel::new();

/// Task forwarding every logic transition of the button pin.
#[embassy_executor::task]
pub async fn watch_button(mut button: ExtiInput<'static>) -> ! {
    loop {
        button.wait_for_any_edge().await;
        if EDGES.try_send(()).is_err() {
            warn!("button edge dropped, queue full");
        }
    }
}
