use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to parse a square
pub fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

/// Helper function to place a piece
pub fn place(pos: &mut Position, row: u8, col: u8, piece: Piece) {
    pos.set_piece(Square::new(row, col), piece);
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: Square, to: Square) -> bool {
    moves.iter().any(|m| m.from == from && m.to == to)
}

/// Helper function to find a move in the move list
pub fn find_move(moves: &[Move], from: Square, to: Square) -> Option<Move> {
    moves.iter().copied().find(|m| m.from == from && m.to == to)
}

/// Power context with both toggles armed for the given pawn
pub fn armed(selected: Square, flags: PowerFlags) -> PowerContext {
    PowerContext {
        selected,
        toggles: PowerToggles {
            super_pawn: true,
            knight_pawn: true,
        },
        flags,
    }
}

// ==================== TEST MODULES ====================

mod powers;
