//! Random move player, mostly useful as a sparring partner in tests and AI-vs-AI games.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{GameState, Move};

pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests.
    pub fn seeded(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let legal_moves = state.legal_moves(None);
        legal_moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
