//! Random tile placement.

use crate::core::rng::TileRng;
use crate::core::tile::Tile;

use super::board::Cell;

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.8;

/// The common spawn value.
pub const SPAWN_LOW: Tile = 2;

/// The rare spawn value.
pub const SPAWN_HIGH: Tile = 4;

/// Pick a cell uniformly from `empties` and a value for it.
///
/// Returns `None` when there is nowhere to place a tile. Draws the cell
/// first, then the value.
pub fn choose_spawn<R: TileRng + ?Sized>(empties: &[Cell], rng: &mut R) -> Option<(Cell, Tile)> {
    if empties.is_empty() {
        return None;
    }
    let cell = empties[rng.pick_index(empties.len())];
    let value = if rng.pick_bool(SPAWN_TWO_PROBABILITY) {
        SPAWN_LOW
    } else {
        SPAWN_HIGH
    };
    Some((cell, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    /// Always picks the last cell and the rare value.
    struct Pessimist;

    impl TileRng for Pessimist {
        fn pick_index(&mut self, upper: usize) -> usize {
            upper - 1
        }

        fn pick_bool(&mut self, _probability: f64) -> bool {
            false
        }
    }

    #[test]
    fn test_no_empty_cells() {
        let mut rng = GameRng::new(1);
        assert_eq!(choose_spawn(&[], &mut rng), None);
    }

    #[test]
    fn test_scripted_source() {
        let empties = [(0, 0), (2, 1), (3, 3)];
        assert_eq!(choose_spawn(&empties, &mut Pessimist), Some(((3, 3), SPAWN_HIGH)));
    }

    #[test]
    fn test_distribution_roughly_four_to_one() {
        let mut rng = GameRng::new(2024);
        let empties = [(0, 0)];
        let twos = (0..10_000)
            .filter(|_| choose_spawn(&empties, &mut rng) == Some(((0, 0), SPAWN_LOW)))
            .count();

        assert!((7_500..8_500).contains(&twos), "got {twos} twos");
    }

    #[test]
    fn test_every_cell_reachable() {
        let mut rng = GameRng::new(99);
        let empties = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut seen = [false; 4];

        for _ in 0..200 {
            let (cell, _) = choose_spawn(&empties, &mut rng).unwrap();
            let idx = empties.iter().position(|&c| c == cell).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
