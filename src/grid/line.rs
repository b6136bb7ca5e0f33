//! One-dimensional slide-and-merge.
//!
//! Every move reduces to the same operation on each row or column: the
//! line is read starting at the wall the tiles travel toward, so index 0
//! is the wall and tiles move toward lower indices.
//!
//! Tiles are handled in that order, nearest the wall first. Each tile
//! first tries to merge with its neighbour, then slides over empty cells,
//! then tries to merge once more where it stopped. A cell that already
//! received a merge is frozen for the rest of the pass, so `[2, 2, 2, 2]`
//! becomes `[4, 4, 0, 0]` and never `[8, 0, 0, 0]`.

use smallvec::SmallVec;

use crate::core::tile::{can_merge, Tile, EMPTY};

/// Result of sliding one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSlide {
    /// Did any tile move or merge?
    pub changed: bool,
    /// Value produced by each merge, in the order they happened.
    pub merged: SmallVec<[Tile; 4]>,
}

impl LineSlide {
    /// Number of cells freed by merges.
    #[must_use]
    pub fn freed_cells(&self) -> usize {
        self.merged.len()
    }
}

/// Slide `line` toward index 0, merging equal neighbours once each.
pub fn slide_line(line: &mut [Tile]) -> LineSlide {
    let mut outcome = LineSlide::default();
    // Cells below this index have taken part in a merge already.
    let mut frozen = 0;

    for from in 1..line.len() {
        if line[from] == EMPTY {
            continue;
        }

        if let Some(value) = merge_forward(line, from, &mut frozen) {
            outcome.changed = true;
            outcome.merged.push(value);
            continue;
        }

        let mut at = from;
        while at > 0 && line[at - 1] == EMPTY {
            line[at - 1] = line[at];
            line[at] = EMPTY;
            at -= 1;
        }
        if at != from {
            outcome.changed = true;
        }

        if let Some(value) = merge_forward(line, at, &mut frozen) {
            outcome.changed = true;
            outcome.merged.push(value);
        }
    }

    outcome
}

/// Merge the tile at `at` into the cell in front of it, if allowed.
fn merge_forward(line: &mut [Tile], at: usize, frozen: &mut usize) -> Option<Tile> {
    if at == 0 {
        return None;
    }
    let dest = at - 1;
    if dest < *frozen || !can_merge(line[dest], line[at]) {
        return None;
    }

    line[dest] *= 2;
    line[at] = EMPTY;
    *frozen = dest + 1;
    Some(line[dest])
}
