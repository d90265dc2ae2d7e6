use crate::game_repr::{Piece, Position, Square};

/// Color-swapped, row-mirrored copy of a position (en-passant target mirrored too)
pub fn mirrored(pos: &Position) -> Position {
    let mut out = Position::empty();
    for sq in Square::all() {
        let piece = pos.piece_at(sq);
        let flipped = if piece.is_none() {
            piece
        } else {
            Piece {
                color: piece.color.opposite(),
                piece_type: piece.piece_type,
            }
        };
        out.set_piece(Square::new(7 - sq.row, sq.col), flipped);
    }
    out.en_passant = pos.en_passant.map(|s| Square::new(7 - s.row, s.col));
    out
}

pub fn board(rows: [&str; 8]) -> Position {
    Position::from_rows(&rows).expect("valid diagram")
}

pub fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub fn lone(row: u8, col: u8, piece: Piece) -> Position {
    let mut pos = Position::empty();
    pos.set_piece(Square::new(row, col), piece);
    pos
}
