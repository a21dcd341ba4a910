#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
#[cfg(feature = "std")]
pub mod sim;
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use ui::*;
