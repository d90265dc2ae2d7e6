//! AI Type Registry - Centralized registry for AI implementations
//!
//! This module provides a way to enumerate and instantiate the automated players.

use super::search::choose_move;
use super::MinimaxPlayer;
use crate::agent::player::Player;
use crate::agent::RandomPlayer;
use crate::game_repr::{GameState, Move};

/// Enumeration of available AI algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    /// Two-ply minimax over the pawn-structure evaluation
    #[default]
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl AIType {
    /// Get all available AI types for UI enumeration
    pub fn all() -> &'static [AIType] {
        &[AIType::Minimax, AIType::Random]
    }

    /// Get the display name for this AI type
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::Minimax => "Minimax",
            AIType::Random => "Random",
        }
    }

    /// Get a short description of this AI type
    pub fn description(&self) -> &'static str {
        match self {
            AIType::Minimax => "Looks one move ahead and assumes the best reply",
            AIType::Random => "Plays any legal move",
        }
    }

    /// Create a Player instance for this AI type
    pub fn create_player(&self) -> Box<dyn Player> {
        match self {
            AIType::Minimax => Box::new(MinimaxPlayer::new(self.display_name().to_string())),
            AIType::Random => Box::new(RandomPlayer::new(self.display_name().to_string())),
        }
    }

    /// Generate a move directly without creating a Player instance
    pub fn generate_move(&self, state: &GameState) -> Option<Move> {
        match self {
            AIType::Minimax => choose_move(&state.position, state.side_to_move).best_move,
            AIType::Random => RandomPlayer::new(String::new()).get_move(state),
        }
    }
}
