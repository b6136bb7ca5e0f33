//! The grid: board storage, the slide algorithm, spawning, and the engine
//! that ties them together.

pub mod board;
pub mod line;
pub mod spawn;
pub mod engine;

pub use board::{line_cells, Board, Cell, CellList};
pub use line::{slide_line, LineSlide};
pub use spawn::{choose_spawn, SPAWN_HIGH, SPAWN_LOW, SPAWN_TWO_PROBABILITY};
pub use engine::GridEngine;
