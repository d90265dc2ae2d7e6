//! Built-in puzzle catalogue.
//!
//! Diagrams use one string per row, row 0 being rank 8: `P`/`Q` are White, `p`/`q`
//! Black, anything else is an empty cell.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::{Color, ParseError, Position, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side_to_move: Color,
    pub en_passant: Option<Square>,
    pub rows: [&'static str; 8],
}

impl Puzzle {
    /// Builds the starting position, en-passant target included.
    pub fn position(&self) -> Result<Position, ParseError> {
        Ok(Position::from_rows(&self.rows)?.with_en_passant(self.en_passant))
    }
}

pub static PUZZLES: &[Puzzle] = &[
    Puzzle {
        key: "passed",
        title: "Create a passed pawn",
        description: "Black has pawns on c6 and d7; you have a pawn on b5. \
                      Try to create a passed pawn (hint: don't trade right away).",
        side_to_move: Color::White,
        en_passant: None,
        rows: [
            "........",
            "...p....",
            "..p.....",
            ".P......",
            "........",
            "........",
            "........",
            "........",
        ],
    },
    Puzzle {
        key: "race",
        title: "Pawn race",
        description: "Both sides have runners. White to move, look for the strongest \
                      first pawn push (hint: a4!).",
        side_to_move: Color::White,
        en_passant: None,
        rows: [
            "........",
            "...p...p",
            "........",
            "........",
            "........",
            "........",
            "P..P....",
            "........",
        ],
    },
    Puzzle {
        key: "enpassant",
        title: "En passant",
        description: "Black's last move was b7-b5. You can capture en passant: look for \
                      cxb6 e.p., then try to win the pawn game.",
        side_to_move: Color::White,
        en_passant: Some(Square { row: 2, col: 1 }),
        rows: [
            "........",
            "...p....",
            "........",
            ".pP.....",
            "........",
            "........",
            "........",
            "........",
        ],
    },
    Puzzle {
        key: "capture",
        title: "Capture battle",
        description: "A small pawn skirmish. Win material and then promote one of your pawns.",
        side_to_move: Color::White,
        en_passant: None,
        rows: [
            "........",
            "....p...",
            "...pp...",
            "..PP....",
            "........",
            "........",
            "........",
            "........",
        ],
    },
    Puzzle {
        key: "3v3break",
        title: "3-on-3 Pawn Break",
        description: "Classic pawn-break pattern. White to move, find the correct pawn \
                      break to create a passed pawn.",
        side_to_move: Color::White,
        en_passant: None,
        rows: [
            "........",
            "ppp.....",
            "........",
            "PPP.....",
            "........",
            "........",
            "........",
            "........",
        ],
    },
];

/// Looks a puzzle up by key (case-insensitive).
pub fn find(key: &str) -> Result<&'static Puzzle, ParseError> {
    PUZZLES
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| ParseError::UnknownPuzzle(key.to_string()))
}

/// Uniformly random puzzle.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> &'static Puzzle {
    // the catalogue is a non-empty static
    PUZZLES.choose(rng).unwrap_or(&PUZZLES[0])
}
