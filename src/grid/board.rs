//! The N×N tile matrix.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::core::error::{GridError, Result};
use crate::core::tile::{is_valid_tile, Tile, EMPTY};

/// Coordinates of a cell as `(x, y)`: column, then row.
pub type Cell = (usize, usize);

/// Empty-cell list sized for the classic board without spilling.
pub type CellList = SmallVec<[Cell; 16]>;

/// Square board of tile values, stored row-major.
///
/// Deserialization goes through `from_cells`, so a snapshot can never
/// produce a board the engine would index out of bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Zero-filled `size × size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a board from rows, top row first.
    ///
    /// Rows must form a square and every value must be 0 or a power of two ≥ 2.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::RaggedRows(size));
            }
            if let Some(&bad) = row.iter().find(|&&v| !is_valid_tile(v)) {
                return Err(GridError::InvalidTile(bad));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Build a board from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<Tile>) -> Result<Self> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(GridError::CellCountMismatch {
                size,
                len: cells.len(),
            });
        }
        if let Some(&bad) = cells.iter().find(|&&v| !is_valid_tile(v)) {
            return Err(GridError::InvalidTile(bad));
        }
        Ok(Self { size, cells })
    }

    /// Board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn get(&self, (x, y): Cell) -> Option<Tile> {
        if x < self.size && y < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Owned copy of the rows, for handing to a renderer.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// All values, row-major.
    pub fn values(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().copied()
    }

    /// Number of empty cells, by full scan.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    /// Coordinates of every empty cell, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| (i % self.size, i / self.size))
            .collect()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board, 0 if empty.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }
}

/// Cells of one line, ordered from the target wall outwards.
///
/// `index` picks the column (vertical) or row (horizontal). With
/// `toward_positive_end` the wall is the last column/row.
pub fn line_cells(
    size: usize,
    index: usize,
    vertical: bool,
    toward_positive_end: bool,
) -> impl Iterator<Item = Cell> {
    (0..size).map(move |step| {
        let along = if toward_positive_end { size - 1 - step } else { step };
        if vertical {
            (index, along)
        } else {
            (along, index)
        }
    })
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            size: usize,
            cells: Vec<Tile>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Board::from_cells(raw.size, raw.cells).map_err(serde::de::Error::custom)
    }
}

impl Index<Cell> for Board {
    type Output = Tile;

    fn index(&self, (x, y): Cell) -> &Self::Output {
        &self.cells[y * self.size + x]
    }
}

impl IndexMut<Cell> for Board {
    fn index_mut(&mut self, (x, y): Cell) -> &mut Self::Output {
        &mut self.cells[y * self.size + x]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            let mut first = true;
            for &value in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                if value == EMPTY {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
