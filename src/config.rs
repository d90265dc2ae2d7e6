//! Game configuration types.
//!
//! A [`GameConfig`] carries everything needed to start a game: who controls each side
//! and where the game starts. The terminal front end builds one from its launch options
//! with [`Cli::game_config`](crate::cli::Cli::game_config).

use crate::agent::ai::AIType;
use crate::agent::{HumanPlayer, Player};
use crate::game_repr::Color;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player controlled by square selection
    Human,
    /// Automated player of the given kind
    Computer(AIType),
}

impl PlayerConfig {
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }

    pub fn create_player(&self, color: Color) -> Box<dyn Player> {
        match self {
            PlayerConfig::Human => Box::new(HumanPlayer::new(color.name().to_string())),
            PlayerConfig::Computer(ai) => ai.create_player(),
        }
    }
}

/// Where a new game starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartPosition {
    /// Full ranks of pawns on rows 6 and 1
    #[default]
    Standard,
    /// A catalogue puzzle, by key
    Puzzle(String),
    /// A catalogue puzzle picked at random on every start
    RandomPuzzle,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Configuration for the Black player
    pub black: PlayerConfig,
    pub start: StartPosition,
}

impl Default for GameConfig {
    /// Human White against the minimax engine, standard start.
    fn default() -> Self {
        Self::pvai(Color::White, AIType::Minimax)
    }
}

impl GameConfig {
    /// Two humans sharing the input.
    pub fn pvp() -> Self {
        Self {
            white: PlayerConfig::Human,
            black: PlayerConfig::Human,
            start: StartPosition::Standard,
        }
    }

    /// Human plays `user_color`, the computer plays the other side.
    pub fn pvai(user_color: Color, ai: AIType) -> Self {
        let (white, black) = match user_color {
            Color::White => (PlayerConfig::Human, PlayerConfig::Computer(ai)),
            Color::Black => (PlayerConfig::Computer(ai), PlayerConfig::Human),
        };

        Self {
            white,
            black,
            start: StartPosition::Standard,
        }
    }

    pub fn aivai(white: AIType, black: AIType) -> Self {
        Self {
            white: PlayerConfig::Computer(white),
            black: PlayerConfig::Computer(black),
            start: StartPosition::Standard,
        }
    }

    pub fn with_start(mut self, start: StartPosition) -> Self {
        self.start = start;
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// The side that owns the power moves.
    ///
    /// That is the only human side in a human-vs-computer game, and White otherwise.
    pub fn human_color(&self) -> Color {
        match (self.white.is_human(), self.black.is_human()) {
            (false, true) => Color::Black,
            _ => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp();
        assert_eq!(config.white, PlayerConfig::Human);
        assert_eq!(config.black, PlayerConfig::Human);
        assert_eq!(config.human_color(), Color::White);
    }

    #[test]
    fn test_pvai_config_white() {
        let config = GameConfig::pvai(Color::White, AIType::Minimax);
        assert_eq!(config.white, PlayerConfig::Human);
        assert_eq!(config.black, PlayerConfig::Computer(AIType::Minimax));
        assert_eq!(config.human_color(), Color::White);
    }

    #[test]
    fn test_pvai_config_black() {
        let config = GameConfig::pvai(Color::Black, AIType::Random);
        assert_eq!(config.white, PlayerConfig::Computer(AIType::Random));
        assert_eq!(config.player(Color::Black), PlayerConfig::Human);
        assert_eq!(config.human_color(), Color::Black);
    }

    #[test]
    fn test_aivai_config() {
        let config = GameConfig::aivai(AIType::Minimax, AIType::Random);
        assert_eq!(config.black, PlayerConfig::Computer(AIType::Random));
        assert_eq!(config.human_color(), Color::White);
    }

    #[test]
    fn test_default_is_reference_setup() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::pvai(Color::White, AIType::Minimax));
        assert_eq!(config.start, StartPosition::Standard);
    }
}
