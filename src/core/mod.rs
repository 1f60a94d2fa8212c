//! Core types: players, cells, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
pub use config::ModelConfig;
pub use error::{HexError, Result};
