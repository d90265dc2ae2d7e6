use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// A board coordinate. Row 0 is rank 8 (Black's back rank), column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0-7.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "Square ({}, {}) out of bounds (0-7)", row, col);
        Self { row, col }
    }

    /// Shifts the square, returning `None` when the result falls off the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn file(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(&self) -> u8 {
        8 - self.row
    }

    /// Every square in row-major order, the scan order used by move generation.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(8 - (rank - b'0'), file - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_round_trip_corners() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!("e4".parse::<Square>().unwrap(), Square::new(4, 4));
        assert_eq!("A2".parse::<Square>().unwrap(), Square::new(6, 0));
    }

    #[test]
    fn test_invalid_square_text() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 7);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Square::new(1, 6)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_square_panics() {
        Square::new(8, 0);
    }
}
