//! Caller-side game loop.
//!
//! The engine only exposes primitives. A session sequences them the way a
//! front-end does after every key press:
//! - apply the move
//! - spawn a tile if the board changed
//! - check for a win or a stuck board
//!
//! Front-ends talk to it through `InputHandler` and redraw from
//! `GameSession::board` whenever the outcome says something changed.

mod game;

pub use game::{GameSession, GameSessionBuilder, InputHandler, MoveOutcome};
