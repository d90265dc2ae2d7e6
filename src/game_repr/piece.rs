#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Queen,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a forward pawn step. White marches toward row 0.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub fn start_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub const fn pawn(color: Color) -> Self {
        Self {
            color,
            piece_type: Type::Pawn,
        }
    }

    pub const fn queen(color: Color) -> Self {
        Self {
            color,
            piece_type: Type::Queen,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    pub fn is_pawn_of(&self, color: Color) -> bool {
        self.piece_type == Type::Pawn && self.color == color
    }

    /// Diagram character: `P p Q q`, anything else reads as an empty cell.
    pub fn from_char(c: char) -> Self {
        match c {
            'P' => Self::pawn(Color::White),
            'p' => Self::pawn(Color::Black),
            'Q' => Self::queen(Color::White),
            'q' => Self::queen(Color::Black),
            _ => Self::none(),
        }
    }

    pub fn to_char(&self) -> char {
        match (self.piece_type, self.color) {
            (Type::Pawn, Color::White) => 'P',
            (Type::Pawn, Color::Black) => 'p',
            (Type::Queen, Color::White) => 'Q',
            (Type::Queen, Color::Black) => 'q',
            (Type::None, _) => '.',
        }
    }
}
