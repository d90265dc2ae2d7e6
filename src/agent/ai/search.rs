// Two-ply minimax search
//
// Every candidate move of the acting side is played on a scratch copy, every
// opponent reply to it is played on a second copy, and the candidate is worth
// the worst evaluation the opponent can force. No pruning, no move ordering:
// candidates are visited in generation order and only a strictly better score
// replaces the incumbent, so the earliest of equally good moves wins.

use crate::game_repr::{simulate, Color, GameOutcome, Move, Position, WinReason};
use super::evaluation::evaluate_for;
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score of `best_move` from the acting side's perspective
    pub score: i32,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes_searched: 0,
            time_ms: 0,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the move for `side` that maximises its worst-case evaluation after one reply.
///
/// Power moves are never searched. Returns a result without a move only when `side`
/// has no legal moves.
pub fn choose_move(pos: &Position, side: Color) -> SearchResult {
    let start_time = Instant::now();
    let mut result = SearchResult::new();

    let candidates = pos.legal_moves(side, None);
    let mut best: Option<(Move, i32)> = None;

    for &mv in &candidates {
        let (score, nodes) = score_candidate(pos, mv, side);
        result.nodes_searched += nodes;

        log::trace!("candidate {} scores {}", mv, score);

        let improves = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        result.best_move = Some(mv);
        result.score = score;
    }
    result.time_ms = start_time.elapsed().as_millis() as u64;

    log::debug!(
        "{} search: {} candidates, {} nodes, best {:?} ({}), {}ms",
        side.name(),
        candidates.len(),
        result.nodes_searched,
        result.best_move.map(|m| m.notation()),
        result.score,
        result.time_ms,
    );

    result
}

/// Worst-case score of `mv` for `side`, plus the number of positions visited.
fn score_candidate(pos: &Position, mv: Move, side: Color) -> (i32, u64) {
    let sim = simulate(pos, mv, side);
    let mut nodes = 1;

    if sim.outcome.is_over() {
        return (evaluate_for(&sim.position, sim.outcome, side), nodes);
    }

    let opponent = side.opposite();
    let replies = sim.position.legal_moves(opponent, None);

    if replies.is_empty() {
        // a stalemated opponent loses in this variant
        let outcome = GameOutcome::Decided {
            winner: side,
            reason: WinReason::NoLegalMoves,
        };
        return (evaluate_for(&sim.position, outcome, side), nodes);
    }

    let mut worst = i32::MAX;
    for &reply in &replies {
        let reply_sim = simulate(&sim.position, reply, opponent);
        nodes += 1;
        worst = worst.min(evaluate_for(&reply_sim.position, reply_sim.outcome, side));
    }

    (worst, nodes)
}
