//! Engine configuration types.
//!
//! Callers configure the engine at construction time:
//! - `WinThreshold`: the tile value that ends the game in a win
//! - `EngineConfig`: board dimension plus the threshold
//!
//! Both are validated up front. The win check and the UI's colour ladder
//! assume a clean doubling chain from 2 to the threshold, so a bad value
//! fails here instead of producing a game that can never be won.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::tile::{Tile, EMPTY};

/// Tile value that wins the game. Always a power of two ≥ 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WinThreshold(Tile);

impl WinThreshold {
    /// The classic 2048 goal.
    pub const DEFAULT: WinThreshold = WinThreshold(2048);

    /// Validate a threshold.
    pub fn new(value: Tile) -> Result<Self, ConfigError> {
        if !value.is_power_of_two() {
            return Err(ConfigError::WinValueNotPowerOfTwo(value));
        }
        if value < 4 {
            return Err(ConfigError::WinValueTooSmall(value));
        }
        Ok(Self(value))
    }

    /// Round free-form user input down to a power of two, then validate.
    ///
    /// `3000` becomes `2048`; anything below 4 is rejected.
    pub fn rounded_down(value: Tile) -> Result<Self, ConfigError> {
        if value < 4 {
            return Err(ConfigError::WinValueTooSmall(value));
        }
        let floor = 1 << (Tile::BITS - 1 - value.leading_zeros());
        Self::new(floor)
    }

    /// Get the raw tile value.
    #[must_use]
    pub const fn value(self) -> Tile {
        self.0
    }

    /// Every value a cell can take before the game is won: `[0, 2, 4, …, threshold]`.
    ///
    /// A UI uses this to assign one colour step per tile value.
    #[must_use]
    pub fn ladder(self) -> Vec<Tile> {
        let mut keys = vec![EMPTY, 2];
        let mut last = 2;
        while last < self.0 {
            last *= 2;
            keys.push(last);
        }
        keys
    }
}

impl Default for WinThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Tile> for WinThreshold {
    type Error = ConfigError;

    fn try_from(value: Tile) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WinThreshold> for Tile {
    fn from(threshold: WinThreshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for WinThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board dimension. The board is `size × size`.
    pub size: usize,

    /// Value that wins the game.
    pub win_threshold: WinThreshold,
}

impl EngineConfig {
    /// Smallest board that still has a neighbour in every line.
    pub const MIN_SIZE: usize = 2;

    /// Classic board dimension.
    pub const DEFAULT_SIZE: usize = 4;

    /// Create a validated configuration.
    pub fn new(size: usize, win_value: Tile) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            win_threshold: WinThreshold::new(win_value)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the board dimension. Checked by `validate`.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set an already validated threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: WinThreshold) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the threshold from a raw value.
    pub fn with_win_value(self, value: Tile) -> Result<Self, ConfigError> {
        Ok(self.with_win_threshold(WinThreshold::new(value)?))
    }

    /// Check the parts that builders leave unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < Self::MIN_SIZE {
            return Err(ConfigError::BoardTooSmall(self.size));
        }
        Ok(())
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            win_threshold: WinThreshold::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_threshold_accepts_powers_of_two() {
        assert_eq!(WinThreshold::new(4).unwrap().value(), 4);
        assert_eq!(WinThreshold::new(2048).unwrap().value(), 2048);
        assert_eq!(WinThreshold::new(1 << 17).unwrap().value(), 1 << 17);
    }

    #[test]
    fn test_win_threshold_rejects_bad_values() {
        assert_eq!(WinThreshold::new(0), Err(ConfigError::WinValueNotPowerOfTwo(0)));
        assert_eq!(WinThreshold::new(1000), Err(ConfigError::WinValueNotPowerOfTwo(1000)));
        assert_eq!(WinThreshold::new(2), Err(ConfigError::WinValueTooSmall(2)));
        assert_eq!(WinThreshold::new(1), Err(ConfigError::WinValueTooSmall(1)));
    }

    #[test]
    fn test_rounded_down() {
        assert_eq!(WinThreshold::rounded_down(3000).unwrap().value(), 2048);
        assert_eq!(WinThreshold::rounded_down(2048).unwrap().value(), 2048);
        assert_eq!(WinThreshold::rounded_down(5).unwrap().value(), 4);
        assert_eq!(WinThreshold::rounded_down(u32::MAX).unwrap().value(), 1 << 31);
        assert_eq!(WinThreshold::rounded_down(3), Err(ConfigError::WinValueTooSmall(3)));
    }

    #[test]
    fn test_ladder() {
        assert_eq!(WinThreshold::new(16).unwrap().ladder(), vec![0, 2, 4, 8, 16]);
        assert_eq!(WinThreshold::new(4).unwrap().ladder(), vec![0, 2, 4]);

        let ladder = WinThreshold::DEFAULT.ladder();
        assert_eq!(ladder.len(), 12);
        assert_eq!(ladder.last(), Some(&2048));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", WinThreshold::DEFAULT), "2048");
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.win_threshold.value(), 2048);
        assert_eq!(config.cell_count(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_size(6)
            .with_win_value(4096)
            .unwrap();

        assert_eq!(config.size, 6);
        assert_eq!(config.win_threshold.value(), 4096);
        assert_eq!(config, EngineConfig::new(6, 4096).unwrap());
    }

    #[test]
    fn test_config_rejects_tiny_board() {
        assert_eq!(EngineConfig::new(1, 2048), Err(ConfigError::BoardTooSmall(1)));
        assert_eq!(
            EngineConfig::default().with_size(0).validate(),
            Err(ConfigError::BoardTooSmall(0))
        );
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::new(5, 512).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialization_validates_threshold() {
        let json = r#"{"size":4,"win_threshold":1000}"#;
        assert!(serde_json::from_str::<EngineConfig>(json).is_err());
    }
}
