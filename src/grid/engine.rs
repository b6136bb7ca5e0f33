//! The grid engine: board state, moves, spawning and terminal checks.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::config::{EngineConfig, WinThreshold};
use crate::core::direction::Direction;
use crate::core::error::{ConfigError, GridError, Result};
use crate::core::rng::TileRng;
use crate::core::tile::{is_valid_tile, Tile, EMPTY};
use crate::rules::{self, GameResult};

use super::board::{line_cells, Board, Cell};
use super::line::slide_line;
use super::spawn::choose_spawn;

/// Owns a board and every rule that mutates it.
///
/// The empty-cell count is kept up to date by moves and spawns rather than
/// rescanned. Code that writes cells through `set_tile` keeps it in sync
/// as well; `update_available_space` resynchronises from a full scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridEngine {
    config: EngineConfig,
    board: Board,
    empty_cells: usize,
    available_space: bool,
    finished: bool,
}

impl GridEngine {
    /// Create an engine with a zero-filled board.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            config,
            board: Board::new(config.size),
            empty_cells: 0,
            available_space: false,
            finished: false,
        };
        engine.reset();
        Ok(engine)
    }

    /// Create an engine preloaded with `board`.
    ///
    /// The board's dimension overrides `config.size`. `finished` starts
    /// false even if the board already holds the win value.
    pub fn with_board(config: EngineConfig, board: Board) -> Result<Self, ConfigError> {
        let config = config.with_size(board.size());
        let mut engine = Self::new(config)?;
        engine.board = board;
        engine.update_available_space();
        Ok(engine)
    }

    /// Zero the board and clear the derived flags.
    pub fn reset(&mut self) {
        self.board.clear();
        self.empty_cells = self.config.cell_count();
        self.available_space = true;
        self.finished = false;
    }

    // === Moves ===

    pub fn move_up(&mut self) -> bool {
        self.slide(true, false)
    }

    pub fn move_down(&mut self) -> bool {
        self.slide(true, true)
    }

    pub fn move_left(&mut self) -> bool {
        self.slide(false, false)
    }

    pub fn move_right(&mut self) -> bool {
        self.slide(false, true)
    }

    /// Move in `direction`. Returns whether any tile moved or merged.
    pub fn apply(&mut self, direction: Direction) -> bool {
        self.slide(direction.is_vertical(), direction.toward_positive_end())
    }

    /// Would moving in `direction` change the board?
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        self.clone().apply(direction)
    }

    /// Slide every row (or column) toward one wall.
    ///
    /// Each line is copied out wall-first, slid, and written back only if
    /// it changed.
    pub fn slide(&mut self, vertical: bool, toward_positive_end: bool) -> bool {
        let size = self.config.size;
        let win = self.config.win_threshold.value();
        let mut moved = false;
        let mut line: SmallVec<[Tile; 8]> = SmallVec::with_capacity(size);

        for index in 0..size {
            line.clear();
            line.extend(line_cells(size, index, vertical, toward_positive_end).map(|cell| self.board[cell]));

            let outcome = slide_line(&mut line);
            if !outcome.changed {
                continue;
            }
            moved = true;

            for (cell, &value) in line_cells(size, index, vertical, toward_positive_end).zip(line.iter()) {
                self.board[cell] = value;
            }

            for &value in &outcome.merged {
                self.empty_cells += 1;
                self.available_space = true;
                if value == win && !self.finished {
                    debug!("reached win tile {value}");
                    self.finished = true;
                }
            }
        }

        moved
    }

    // === Bookkeeping ===

    /// Is `(x, y)` on the board?
    #[must_use]
    pub fn is_inside_bounds(&self, x: isize, y: isize) -> bool {
        let size = self.config.size as isize;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Recount empty cells from scratch.
    pub fn update_available_space(&mut self) {
        self.empty_cells = self.board.count_empty();
        self.available_space = self.empty_cells > 0;
    }

    /// Write one cell directly, keeping the empty count in sync.
    ///
    /// Meant for scenario setup and tooling, not for play.
    pub fn set_tile(&mut self, (x, y): Cell, value: Tile) -> Result<()> {
        let size = self.config.size;
        let previous = self.board.get((x, y)).ok_or(GridError::OutOfBounds { x, y, size })?;
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTile(value));
        }

        self.board[(x, y)] = value;
        match (previous == EMPTY, value == EMPTY) {
            (true, false) => self.empty_cells -= 1,
            (false, true) => self.empty_cells += 1,
            _ => {}
        }
        self.available_space = self.empty_cells > 0;
        Ok(())
    }

    // === Spawning ===

    /// Drop a 2 (80%) or a 4 (20%) on a random empty cell.
    ///
    /// Does nothing when the board is full. Returns the cell that was filled.
    pub fn spawn_random_tile<R: TileRng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        if !self.available_space {
            return None;
        }

        let empties = self.board.empty_cells();
        let (cell, value) = choose_spawn(&empties, rng)?;

        self.board[cell] = value;
        self.empty_cells -= 1;
        self.available_space = self.empty_cells > 0;
        trace!("spawned {value} at {cell:?}, {} empty", self.empty_cells);
        Some(cell)
    }

    // === Terminal state ===

    /// Has the game ended, either by reaching `win_value` or by a full
    /// board with no merges left?
    #[must_use]
    pub fn is_terminal(&self, win_value: Tile) -> bool {
        rules::terminal_result(&self.board, win_value).is_some()
    }

    /// Terminal state against the configured threshold.
    #[must_use]
    pub fn terminal_state(&self) -> Option<GameResult> {
        rules::terminal_result(&self.board, self.config.win_threshold.value())
    }

    // === Accessors ===

    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn win_threshold(&self) -> WinThreshold {
        self.config.win_threshold
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned snapshot of the rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.board.to_rows()
    }

    #[must_use]
    pub fn empty_cell_count(&self) -> usize {
        self.empty_cells
    }

    #[must_use]
    pub fn has_available_space(&self) -> bool {
        self.available_space
    }

    /// Has a merge produced the win value since the last reset?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            config,
            board: Board::new(config.size),
            empty_cells: config.cell_count(),
            available_space: true,
            finished: false,
        }
    }
}
