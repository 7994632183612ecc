//! Embassy-based firmware for a buzz wire skill game running on a [Nucleo-F767ZI development
//! board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html).
//!
//! The player guides a metal loop along a bent wire. Touching the wire pulls an analog sense line
//! to ground and costs a penalty point; a five-LED ring shows the shrinking time budget, a
//! 7-segment digit shows the penalty count, and a piezo speaker provides melodies and the contact
//! buzz. One push button wakes the game, starts a round when held, and confirms a finished run.
//!
//! All rules live in `buzzwire_lib` and are driven by a 100 Hz heartbeat; this crate maps the
//! game's three execution contexts onto Embassy tasks:
//!
//! - [`run_game`] — the periodic tick handler plus the foreground idle loop (it parks on the
//!   button channel while the game sleeps, letting the executor idle the core),
//! - [`button::watch_button`] — the wake/button edge detector,
//! - [`sensor::sample_wire`] — the continuous wire-contact conversion cycle.

#![no_std]
#![no_main]

mod board;
mod button;
mod buzzer;
mod display;
mod sensor;

use buzzwire_lib::config::TICK_HZ;
use buzzwire_lib::game::{Game, GameState};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_stm32::{
    Config,
    adc::{Adc, SampleTime},
    exti::ExtiInput,
    gpio::{Level, Output, OutputType, Pull, Speed},
    time::Hertz,
    timer::simple_pwm::{PwmPin, SimplePwm},
};
use embassy_time::{Duration, Ticker};

use crate::board::BuzzWireBoard;
use crate::buzzer::Buzzer;
use crate::display::{LedRing, SevenSegment};

use {cortex_m as _, defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Initializing buzz wire");

    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        // hse: high-speed external clock, fed by the on-board ST-LINK
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL216,
            divp: Some(PllPDiv::DIV2), // 8mhz / 4 * 216 / 2 = 216Mhz
            divq: None,
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV4;
        config.rcc.apb2_pre = APBPrescaler::DIV2;
        config.rcc.sys = Sysclk::PLL1_P;
    }
    let p = embassy_stm32::init(config);

    // the one shared wake/start/confirm pin
    let wake_button = ExtiInput::new(p.PC13, p.EXTI13, Pull::None);
    unwrap!(spawner.spawn(button::watch_button(wake_button)));

    // wire-contact sense on A0; rests high, grounded on touch
    let mut adc = Adc::new(p.ADC1);
    adc.set_sample_time(SampleTime::CYCLES112);
    let sensor_armed = unwrap!(sensor::SENSOR_ARM_SYNC.receiver());
    unwrap!(spawner.spawn(sensor::sample_wire(adc, p.PA3, sensor_armed)));

    let buzzer_pin = PwmPin::new_ch1(p.PB4, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM3,
        Some(buzzer_pin),
        None,
        None,
        None,
        Hertz::hz(440),
        Default::default(),
    );
    let buzzer = Buzzer::new(pwm);

    let ring = LedRing::new([
        Output::new(p.PE2, Level::Low, Speed::Low),
        Output::new(p.PE3, Level::Low, Speed::Low),
        Output::new(p.PE4, Level::Low, Speed::Low),
        Output::new(p.PE5, Level::Low, Speed::Low),
        Output::new(p.PE6, Level::Low, Speed::Low),
    ]);

    // segments a..=g
    let digit = SevenSegment::new([
        Output::new(p.PD0, Level::Low, Speed::Low),
        Output::new(p.PD1, Level::Low, Speed::Low),
        Output::new(p.PD2, Level::Low, Speed::Low),
        Output::new(p.PD3, Level::Low, Speed::Low),
        Output::new(p.PD4, Level::Low, Speed::Low),
        Output::new(p.PD5, Level::Low, Speed::Low),
        Output::new(p.PD6, Level::Low, Speed::Low),
    ]);

    let board = BuzzWireBoard::new(buzzer, ring, digit, sensor::SENSOR_ARM_SYNC.sender());
    unwrap!(spawner.spawn(run_game(board)));
}

/// The game's heartbeat and idle loop in one task.
///
/// While the game sleeps, the task blocks on the button channel and the executor parks the core.
/// Awake, it drives one tick per 10 ms and feeds pin edges into the game the moment they arrive;
/// the tick itself performs no waits, so it always completes well inside one period.
#[embassy_executor::task]
async fn run_game(mut board: BuzzWireBoard) -> ! {
    let mut game = Game::new();
    let mut ticker = Ticker::every(Duration::from_hz(u64::from(TICK_HZ)));

    loop {
        if game.state() == GameState::Sleep {
            button::EDGES.receive().await;
            if game.on_button_edge() {
                info!("wake edge, entering init");
            }
            ticker.reset();
            continue;
        }

        match select(ticker.next(), button::EDGES.receive()).await {
            Either::First(()) => {
                let before = game.state();
                game.tick(sensor::is_touching(), &mut board);
                let after = game.state();
                if after != before {
                    info!(
                        "{} -> {} (contacts {}, best {})",
                        before,
                        after,
                        game.contacts(),
                        game.best_score()
                    );
                }
            }
            Either::Second(()) => {
                game.on_button_edge();
            }
        }
    }
}
