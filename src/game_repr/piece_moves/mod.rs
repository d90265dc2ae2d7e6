pub mod pawn;
pub mod powers;

pub use powers::{PowerContext, PowerFlags, PowerToggles};

use super::{Color, MoveList, Position, Square};

impl Position {
    /// All legal moves for `side`, scanning rows then columns.
    ///
    /// Power moves are appended for the pawn on `powers.selected` only, and only when the
    /// context allows them for this side. Pass `None` to generate plain pawn moves.
    pub fn legal_moves(&self, side: Color, powers: Option<&PowerContext>) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if self.piece_at(sq).is_pawn_of(side) {
                self.moves_from_into(sq, side, powers, &mut moves);
            }
        }
        moves
    }

    /// Moves of the single pawn on `sq`, empty if it is not a pawn of `side`.
    pub fn moves_from(&self, sq: Square, side: Color, powers: Option<&PowerContext>) -> MoveList {
        let mut moves = MoveList::new();
        self.moves_from_into(sq, side, powers, &mut moves);
        moves
    }

    /// Generate moves for one pawn into a provided buffer.
    /// The buffer is NOT cleared before adding moves
    pub fn moves_from_into(
        &self,
        sq: Square,
        side: Color,
        powers: Option<&PowerContext>,
        moves: &mut MoveList,
    ) {
        if !self.piece_at(sq).is_pawn_of(side) {
            return;
        }

        self.pawn_moves_into(sq, side, moves);

        if let Some(ctx) = powers {
            self.power_moves_into(sq, side, ctx, moves);
        }
    }

    pub fn has_legal_moves(&self, side: Color) -> bool {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            self.moves_from_into(sq, side, None, &mut moves);
            if !moves.is_empty() {
                return true;
            }
        }
        false
    }
}
