//! Error types.
//!
//! Gameplay never fails: full boards and blocked moves are ordinary values.
//! Errors only surface when configuring an engine or when a caller writes
//! cells directly.

use thiserror::Error;

use super::tile::Tile;

/// Invalid engine configuration. Raised at construction time.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("win value {0} is not a power of two")]
    WinValueNotPowerOfTwo(Tile),
    #[error("win value {0} is below the minimum of 4")]
    WinValueTooSmall(Tile),
    #[error("board size {0} is below the minimum of 2")]
    BoardTooSmall(usize),
}

/// Invalid direct access to the grid.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("{0} is not a valid tile value")]
    InvalidTile(Tile),
    #[error("board rows do not form a square of side {0}")]
    RaggedRows(usize),
    #[error("{len} cells do not fill a {size}x{size} board")]
    CellCountMismatch { size: usize, len: usize },
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::WinValueNotPowerOfTwo(1000).to_string(),
            "win value 1000 is not a power of two"
        );
        assert_eq!(
            GridError::OutOfBounds { x: 4, y: 0, size: 4 }.to_string(),
            "cell (4, 0) is outside a 4x4 board"
        );
    }
}
