//! This crate contains the architecture-agnostic logic for a buzz wire skill game: a player guides a
//! metal loop along a bent wire without touching it, every touch counts as a penalty, and a shrinking
//! time budget decides between a win and a loss.
//!
//! Everything here is driven by a single 100 Hz heartbeat. The firmware crate invokes
//! [`Game::tick`][game::Game::tick] from its periodic timer context and
//! [`Game::on_button_edge`][game::Game::on_button_edge] from its edge-interrupt context; all hardware
//! effects flow out through the [`Board`][io::Board] trait, so the whole game can be simulated tick by
//! tick on a host machine.

#![deny(missing_docs)]
#![no_std]

pub mod config;
pub mod display;
pub mod game;
pub mod io;
pub mod melody;
