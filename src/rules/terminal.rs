//! Win and stuck detection.

use serde::{Deserialize, Serialize};

use crate::core::tile::{can_merge, Tile, EMPTY};
use crate::grid::board::Board;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A tile reached the win threshold.
    Won,
    /// The board is full and nothing can merge.
    Lost,
}

impl GameResult {
    /// Did the player win?
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameResult::Won)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => f.write_str("won"),
            GameResult::Lost => f.write_str("lost"),
        }
    }
}

/// Does any cell hold `value`?
#[must_use]
pub fn contains_value(board: &Board, value: Tile) -> bool {
    board.values().any(|v| v == value)
}

/// Is there a pair of equal tiles side by side or one above the other?
///
/// Scans every cell against its right and lower neighbour. Empty cells
/// count as a pair too, which only matters for boards with space left.
/// Tiles too large to double never pair.
#[must_use]
pub fn has_adjacent_pair(board: &Board) -> bool {
    let size = board.size();
    let pairs = |a: Tile, b: Tile| (a == EMPTY && b == EMPTY) || can_merge(a, b);
    for y in 0..size {
        for x in 0..size {
            let value = board[(x, y)];
            if x + 1 < size && pairs(value, board[(x + 1, y)]) {
                return true;
            }
            if y + 1 < size && pairs(value, board[(x, y + 1)]) {
                return true;
            }
        }
    }
    false
}

/// Full board with no legal move in any direction.
#[must_use]
pub fn is_stuck(board: &Board) -> bool {
    !contains_value(board, EMPTY) && !has_adjacent_pair(board)
}

/// Classify a board. The win check runs first, so a board that is both
/// won and stuck reports `Won`.
#[must_use]
pub fn terminal_result(board: &Board, win_value: Tile) -> Option<GameResult> {
    if contains_value(board, win_value) {
        Some(GameResult::Won)
    } else if is_stuck(board) {
        Some(GameResult::Lost)
    } else {
        None
    }
}
