//! Tile values.

/// A cell value: `0` for empty, otherwise a power of two ≥ 2.
pub type Tile = u32;

/// The empty cell.
pub const EMPTY: Tile = 0;

/// Is this a value a cell may hold?
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two())
}

/// Can two tiles merge into one? The doubled value must still fit a `Tile`,
/// so a pair of `1 << 31` tiles stays put.
#[must_use]
pub const fn can_merge(a: Tile, b: Tile) -> bool {
    a != EMPTY && a == b && a.checked_mul(2).is_some()
}
