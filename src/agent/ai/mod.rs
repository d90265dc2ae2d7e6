// AI Agent - Two-ply minimax
//
// This module implements the automated opponent: a static pawn-structure
// evaluation and a search that tries every move, assumes the opponent answers
// with the reply that hurts most, and keeps the best such move.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Fixed depth, no pruning, no time budget
// - Searches clones only; the live game is never touched

mod ai_type;
pub mod evaluation;
mod minimax_player;
pub mod search;

#[cfg(test)]
mod tests;

pub use ai_type::AIType;
pub use minimax_player::MinimaxPlayer;

// Re-export useful types
pub use evaluation::{evaluate, evaluate_for, WIN_SCORE};
pub use search::{choose_move, SearchResult};
