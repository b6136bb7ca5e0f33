//! Core engine types: tiles, directions, RNG, configuration, errors.
//!
//! These are the building blocks shared by the grid, the rules and the
//! session layer. None of them know about board layout.

pub mod tile;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{can_merge, is_valid_tile, Tile, EMPTY};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState, TileRng};
pub use config::{EngineConfig, WinThreshold};
pub use error::{ConfigError, GridError};
