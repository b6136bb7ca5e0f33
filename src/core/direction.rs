//! Move directions.

use serde::{Deserialize, Serialize};

/// The four directions a player can slide the board.
///
/// `x` grows to the right and `y` grows downwards, so `Down` and `Right`
/// push tiles toward the positive end of their axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in the order the UI lists them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Does this direction move along columns?
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Does this direction push tiles toward the highest index?
    #[must_use]
    pub const fn toward_positive_end(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Left => "Left",
            Direction::Down => "Down",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());

        assert!(Direction::Down.toward_positive_end());
        assert!(Direction::Right.toward_positive_end());
        assert!(!Direction::Up.toward_positive_end());
        assert!(!Direction::Left.toward_positive_end());
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::Left), "Left");
    }
}
