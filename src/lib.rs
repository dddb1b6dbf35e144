//! Hong Kong 97 fan game: dodge and shoot falling enemies in the terminal.
//!
//! - `entities`: pure data plus the per-kind update rules
//! - `collision`: rectangle-overlap checks between entity collections
//! - `compute`: session state transitions (input, spawn, tick, restart)
//! - `display`: rendering onto a `Canvas`, with a crossterm implementation
//! - `input`: key translation and held-key tracking
//! - `game_loop`: the fixed-rate loop tying it all together

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod logging;

pub use config::{ConfigError, GameConfig};
pub use error::GameError;
