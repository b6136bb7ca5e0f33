//! # rust-2048
//!
//! The grid engine behind the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Engine, not front-end**: No rendering, input binding or windows.
//!    A UI reads the board, calls a move, and redraws.
//!
//! 2. **Injected randomness**: Tile spawning takes its random source as a
//!    parameter (`TileRng`), so any sequence of moves and spawns can be
//!    replayed exactly.
//!
//! 3. **Validated configuration**: Board size and win threshold are checked
//!    once at construction. Gameplay itself never returns an error.
//!
//! ## Architecture
//!
//! - **Line slide**: Every move is the same 1-D slide-and-merge applied to
//!   each row or column, read from the target wall outwards.
//!
//! - **Incremental bookkeeping**: The empty-cell count is updated by each
//!   merge and spawn instead of rescanning the board.
//!
//! ## Modules
//!
//! - `core`: Tiles, directions, RNG, configuration, errors
//! - `grid`: Board storage, line slide, spawning, `GridEngine`
//! - `rules`: Win and stuck detection
//! - `session`: Move → spawn → terminal-check loop for front-ends

pub mod core;
pub mod grid;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, EngineConfig, GameRng, GameRngState, GridError, Tile, TileRng,
    WinThreshold, EMPTY,
};

pub use crate::grid::{slide_line, Board, Cell, GridEngine, LineSlide};

pub use crate::rules::{terminal_result, GameResult};

pub use crate::session::{GameSession, GameSessionBuilder, InputHandler, MoveOutcome};
