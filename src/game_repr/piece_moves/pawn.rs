use crate::game_repr::{Color, Move, MoveList, MoveType, Position, Square, Type};

impl Position {
    /// Standard pawn moves in fixed order: single push, double push, then for each
    /// diagonal (left, right) the normal capture followed by en passant.
    pub fn pawn_moves_into(&self, sq: Square, side: Color, moves: &mut MoveList) {
        let dir = side.forward();
        let promotion_row = side.promotion_row();

        if let Some(one) = sq.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(sq, one, MoveType::Normal, one.row == promotion_row));

                if sq.row == side.start_row() {
                    if let Some(two) = sq.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(sq, two, MoveType::DoublePush, false));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(target) = sq.offset(dir, d_col) else {
                continue;
            };
            let target_piece = self.piece_at(target);

            // queens are never capturable by a plain pawn step
            if target_piece.is_pawn_of(side.opposite()) {
                moves.push(Move::new(
                    sq,
                    target,
                    MoveType::Capture,
                    target.row == promotion_row,
                ));
            }

            if self.en_passant == Some(target) && target_piece.piece_type == Type::None {
                let captured = Square::new(sq.row, target.col);
                if self.piece_at(captured).is_pawn_of(side.opposite()) {
                    moves.push(Move::new(
                        sq,
                        target,
                        MoveType::EnPassant { captured },
                        target.row == promotion_row,
                    ));
                }
            }
        }
    }
}
