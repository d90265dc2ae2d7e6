// Position evaluation function
// Returns score from Black's point of view (positive = good for Black)

use crate::game_repr::{Color, GameOutcome, Position, Square, Type};

// Material values
const PAWN_VALUE: i32 = 100;
const QUEEN_VALUE: i32 = 900;

/// Score of a decided game. Dominates any material count.
pub const WIN_SCORE: i32 = 10_000;

// Pawn structure weights
const ADVANCEMENT_PER_ROW: i32 = 8;
const PASSED_PAWN_BONUS: i32 = 150;
const PASSED_PAWN_PER_ROW: i32 = 10;
const ATTACKED_PAWN_PENALTY: i32 = 70;

/// Rows a pawn of `color` has travelled from its own back rank (0-7).
fn advancement(color: Color, row: u8) -> i32 {
    match color {
        Color::Black => row as i32,
        Color::White => 7 - row as i32,
    }
}

/// No enemy pawn on the same or an adjacent file anywhere ahead of the pawn.
pub fn is_passed_pawn(pos: &Position, sq: Square, color: Color) -> bool {
    let enemy = color.opposite();
    let dir = color.forward();

    let mut ahead = sq.offset(dir, 0);
    while let Some(front) = ahead {
        for d_col in [-1, 0, 1] {
            if let Some(s) = front.offset(0, d_col) {
                if pos.piece_at(s).is_pawn_of(enemy) {
                    return false;
                }
            }
        }
        ahead = front.offset(dir, 0);
    }

    true
}

/// Whether an enemy pawn could capture the piece on `sq` with a diagonal step.
pub fn is_attacked_by_pawn(pos: &Position, sq: Square, attacker: Color) -> bool {
    // attackers stand one row behind the target, from their own point of view
    let attacker_row = -attacker.forward();
    [-1, 1].into_iter().any(|d_col| {
        sq.offset(attacker_row, d_col)
            .map(|s| pos.piece_at(s).is_pawn_of(attacker))
            .unwrap_or(false)
    })
}

/// Value of a single pawn for its own side.
fn pawn_score(pos: &Position, sq: Square, color: Color) -> i32 {
    let advanced = advancement(color, sq.row);
    let mut score = PAWN_VALUE + advanced * ADVANCEMENT_PER_ROW;

    if is_passed_pawn(pos, sq, color) {
        score += PASSED_PAWN_BONUS + advanced * PASSED_PAWN_PER_ROW;
    }

    if is_attacked_by_pawn(pos, sq, color.opposite()) {
        score -= ATTACKED_PAWN_PENALTY;
    }

    score
}

/// Static evaluation from Black's perspective.
///
/// A decided game scores `±WIN_SCORE` without looking at the board. Otherwise every pawn
/// contributes material, advancement, a passed-pawn bonus and a penalty when an enemy pawn
/// attacks it; queens count as 900. White terms are subtracted.
pub fn evaluate(pos: &Position, outcome: GameOutcome) -> i32 {
    match outcome.winner() {
        Some(Color::Black) => return WIN_SCORE,
        Some(Color::White) => return -WIN_SCORE,
        None => {}
    }

    let mut score = 0;

    for sq in Square::all() {
        let piece = pos.piece_at(sq);
        let value = match piece.piece_type {
            Type::Pawn => pawn_score(pos, sq, piece.color),
            Type::Queen => QUEEN_VALUE,
            Type::None => continue,
        };

        match piece.color {
            Color::Black => score += value,
            Color::White => score -= value,
        }
    }

    score
}

/// Evaluation from `color`'s perspective.
pub fn evaluate_for(pos: &Position, outcome: GameOutcome, color: Color) -> i32 {
    match color {
        Color::Black => evaluate(pos, outcome),
        Color::White => -evaluate(pos, outcome),
    }
}
