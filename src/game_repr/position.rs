use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND RAW MOVE EXECUTION
 */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Mailbox indexed `[row][col]`, row 0 = rank 8
    pub cells: [[Piece; 8]; 8],
    /// Square skipped by the last double push; valid for the very next move only
    pub en_passant: Option<Square>,
}

impl Default for Position {
    /// Standard start: a full line of pawns per side on ranks 2 and 7.
    fn default() -> Self {
        let mut pos = Self::empty();
        for col in 0..8 {
            pos.cells[Color::White.start_row() as usize][col] = Piece::pawn(Color::White);
            pos.cells[Color::Black.start_row() as usize][col] = Piece::pawn(Color::Black);
        }
        pos
    }
}

impl Position {
    pub fn empty() -> Position {
        Self {
            cells: [[Piece::none(); 8]; 8],
            en_passant: None,
        }
    }

    /// Reads an eight-row diagram, top row first (`"...p...."`).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Position, ParseError> {
        if rows.len() != 8 {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut pos = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.as_ref().chars().collect();
            if chars.len() != 8 {
                return Err(ParseError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, c) in chars.into_iter().enumerate() {
                pos.cells[row][col] = Piece::from_char(c);
            }
        }

        Ok(pos)
    }

    pub fn to_rows(&self) -> [String; 8] {
        std::array::from_fn(|row| self.cells[row].iter().map(Piece::to_char).collect())
    }

    pub fn with_en_passant(mut self, target: Option<Square>) -> Position {
        self.en_passant = target;
        self
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Pawns only; queens never count toward a side's pawn supply.
    pub fn count_pawns(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.is_pawn_of(color))
            .count()
    }

    /// Moves the piece and updates the en-passant target. No legality check.
    pub fn mk_move(&mut self, mv: Move) {
        let moving_piece = self.piece_at(mv.from);
        debug_assert!(
            moving_piece.piece_type == Type::Pawn,
            "Moving a non-pawn from {}",
            mv.from
        );
        let color = moving_piece.color;

        self.set_piece(mv.from, Piece::none());

        match mv.move_type {
            MoveType::EnPassant { captured } => self.set_piece(captured, Piece::none()),
            MoveType::Capture => self.set_piece(mv.to, Piece::none()),
            MoveType::Normal | MoveType::DoublePush => {}
        }

        if mv.promotion {
            self.set_piece(mv.to, Piece::queen(color));
        } else {
            self.set_piece(mv.to, moving_piece);
        }

        self.en_passant = if mv.is_double_push() {
            // the square the pawn jumped over
            mv.to.offset(-color.forward(), 0)
        } else {
            None
        };
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
