//! Game session implementation.

use log::{debug, info};

use crate::core::{ConfigError, Direction, EngineConfig, GameRng, GameRngState, Tile, WinThreshold};
use crate::grid::{Board, GridEngine};
use crate::rules::GameResult;

/// What a single input did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing could move in that direction.
    NoChange,
    /// Tiles moved and a new tile was spawned.
    Moved,
    /// The game is over, either now or from an earlier move.
    GameOver(GameResult),
}

impl MoveOutcome {
    /// Should the front-end redraw?
    #[must_use]
    pub const fn has_update(self) -> bool {
        match self {
            MoveOutcome::NoChange => false,
            MoveOutcome::Moved => true,
            MoveOutcome::GameOver(_) => true,
        }
    }

    /// Result of the game, if it ended.
    #[must_use]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            MoveOutcome::GameOver(result) => Some(result),
            _ => None,
        }
    }
}

/// Binding between a front-end's input layer and the game.
pub trait InputHandler {
    /// React to one directional input.
    fn handle_input(&mut self, direction: Direction) -> MoveOutcome;
}

/// A running game: engine plus its spawn RNG.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: GridEngine,
    rng: GameRng,
    starting_tiles: usize,
    result: Option<GameResult>,
    moves: u32,
}

/// Builder for creating a GameSession.
#[derive(Clone, Debug)]
pub struct GameSessionBuilder {
    size: usize,
    win_value: Tile,
    starting_tiles: usize,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            size: EngineConfig::DEFAULT_SIZE,
            win_value: WinThreshold::DEFAULT.value(),
            starting_tiles: 2,
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn win_value(mut self, value: Tile) -> Self {
        self.win_value = value;
        self
    }

    pub fn starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Validate the configuration and deal the opening tiles.
    pub fn build(self, seed: u64) -> Result<GameSession, ConfigError> {
        let config = EngineConfig::new(self.size, self.win_value)?;
        let mut session = GameSession {
            engine: GridEngine::new(config)?,
            rng: GameRng::new(seed),
            starting_tiles: self.starting_tiles,
            result: None,
            moves: 0,
        };
        session.new_game();
        Ok(session)
    }
}

impl GameSession {
    /// Clear the board and deal the opening tiles.
    ///
    /// The RNG carries on from where it was, so consecutive games in one
    /// session differ.
    pub fn new_game(&mut self) {
        self.engine.reset();
        for _ in 0..self.starting_tiles {
            self.engine.spawn_random_tile(&mut self.rng);
        }
        self.moves = 0;
        self.result = self.engine.terminal_state();
        debug!(
            "new {size}x{size} game, win at {win}",
            size = self.engine.size(),
            win = self.engine.win_threshold()
        );
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Read-only board for rendering.
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// How the game ended, or `None` while it is running.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Moves that changed the board since the game started.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Spawn RNG checkpoint, for replaying from this point.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl InputHandler for GameSession {
    fn handle_input(&mut self, direction: Direction) -> MoveOutcome {
        if let Some(result) = self.result {
            return MoveOutcome::GameOver(result);
        }

        if !self.engine.apply(direction) {
            debug!("{direction}: no change");
            return MoveOutcome::NoChange;
        }

        self.moves += 1;
        self.engine.spawn_random_tile(&mut self.rng);
        debug!("{direction}: move {}, {} empty", self.moves, self.engine.empty_cell_count());

        match self.engine.terminal_state() {
            Some(result) => {
                info!(
                    "game {result} after {} moves, max tile {}",
                    self.moves,
                    self.engine.max_tile()
                );
                self.result = Some(result);
                MoveOutcome::GameOver(result)
            }
            None => MoveOutcome::Moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = GameSessionBuilder::new().build(42).unwrap();

        assert_eq!(session.engine().size(), 4);
        assert_eq!(session.engine().empty_cell_count(), 14);
        assert_eq!(session.board().count_empty(), 14);
        assert!(!session.is_over());
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_opening_tiles_are_twos_or_fours() {
        for seed in 0..20 {
            let session = GameSessionBuilder::new().build(seed).unwrap();
            for value in session.board().values().filter(|&v| v != 0) {
                assert!(value == 2 || value == 4);
            }
        }
    }

    #[test]
    fn test_builder_validates() {
        assert_eq!(
            GameSessionBuilder::new().win_value(100).build(1).unwrap_err(),
            ConfigError::WinValueNotPowerOfTwo(100)
        );
        assert_eq!(
            GameSessionBuilder::new().size(1).build(1).unwrap_err(),
            ConfigError::BoardTooSmall(1)
        );
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!MoveOutcome::NoChange.has_update());
        assert!(MoveOutcome::Moved.has_update());
        assert!(MoveOutcome::GameOver(GameResult::Lost).has_update());
        assert_eq!(MoveOutcome::GameOver(GameResult::Won).result(), Some(GameResult::Won));
        assert_eq!(MoveOutcome::Moved.result(), None);
    }

    #[test]
    fn test_move_spawns_one_tile() {
        let mut session = GameSessionBuilder::new().build(7).unwrap();

        let direction = Direction::ALL
            .into_iter()
            .find(|&d| session.engine().can_move(d))
            .unwrap();
        let before = session.board().count_empty();
        let outcome = session.handle_input(direction);

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(session.moves(), 1);
        // A merge frees a cell, the spawn takes one.
        let after = session.board().count_empty();
        assert!(after == before - 1 || after == before);
        assert_eq!(session.engine().empty_cell_count(), after);
    }

    #[test]
    fn test_new_game_resets_counters() {
        let mut session = GameSessionBuilder::new().build(3).unwrap();
        for dir in Direction::ALL {
            session.handle_input(dir);
        }

        session.new_game();
        assert_eq!(session.moves(), 0);
        assert_eq!(session.board().count_empty(), 14);
        assert!(!session.is_over());
    }
}
