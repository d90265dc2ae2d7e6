//! MinimaxPlayer - automated opponent using the two-ply minimax search
//!
//! The player holds no board of its own. Each `get_move` call searches the position it
//! is handed, so the live game is only ever read, never mutated.
//!
//! # Examples
//!
//! ```
//! use pawn_lab::agent::ai::MinimaxPlayer;
//! use pawn_lab::agent::Player;
//! use pawn_lab::game_repr::GameState;
//!
//! let state = GameState::default();
//! let mut ai = MinimaxPlayer::new("Pawn Bot".to_string());
//! assert!(ai.get_move(&state).is_some());
//! ```

use super::search::{choose_move, SearchResult};
use crate::agent::player::Player;
use crate::game_repr::{GameOutcome, GameState, Move};

pub struct MinimaxPlayer {
    /// Display name for this AI player
    name: String,

    /// Statistics of the most recent search
    last_search: Option<SearchResult>,
}

impl MinimaxPlayer {
    pub fn new(name: String) -> Self {
        Self {
            name,
            last_search: None,
        }
    }

    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new("Minimax".to_string())
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_over() {
            return None;
        }

        let result = choose_move(&state.position, state.side_to_move);
        let mv = result.best_move;
        self.last_search = Some(result);
        mv
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        log::debug!("{} saw the game end: {:?}", self.name, outcome);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
