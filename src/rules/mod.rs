//! Terminal-state rules.
//!
//! A game ends in one of two ways:
//! - a tile reaches the win threshold
//! - the board is full and no neighbouring tiles match
//!
//! These checks read a board and never mutate it. The engine and the
//! session layer call into them after every move.

pub mod terminal;

pub use terminal::{contains_value, has_adjacent_pair, is_stuck, terminal_result, GameResult};
