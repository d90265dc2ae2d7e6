use smallvec::SmallVec;
use std::fmt;

use super::Square;

/// Move buffer. 64 inline slots cover every pawn move a side can have.
pub type MoveList = SmallVec<[Move; 64]>;

/// One-shot special moves reserved for the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Power {
    /// One step in any of the eight king directions.
    SuperPawn,
    /// One jump to any of the eight knight offsets.
    KnightPawn,
}

impl Power {
    pub fn name(&self) -> &'static str {
        match self {
            Power::SuperPawn => "Super Pawn",
            Power::KnightPawn => "Knight Pawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    Normal,
    DoublePush,
    Capture,
    /// The captured pawn stands beside the mover, not on the destination.
    EnPassant { captured: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub move_type: MoveType,
    /// Set whenever `to` lies on the mover's far rank. Always promotes to a queen.
    pub promotion: bool,
    pub power: Option<Power>,
}

impl Move {
    pub fn new(from: Square, to: Square, move_type: MoveType, promotion: bool) -> Move {
        Self {
            from,
            to,
            move_type,
            promotion,
            power: None,
        }
    }

    pub fn with_power(mut self, power: Power) -> Move {
        self.power = Some(power);
        self
    }

    pub fn is_capture(&self) -> bool {
        matches!(
            self.move_type,
            MoveType::Capture | MoveType::EnPassant { .. }
        )
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.move_type, MoveType::EnPassant { .. })
    }

    pub fn is_double_push(&self) -> bool {
        self.move_type == MoveType::DoublePush
    }

    /// Square of the pawn removed by an en-passant capture.
    pub fn captured_square(&self) -> Option<Square> {
        match self.move_type {
            MoveType::EnPassant { captured } => Some(captured),
            _ => None,
        }
    }

    pub fn uses_super_pawn(&self) -> bool {
        self.power == Some(Power::SuperPawn)
    }

    pub fn uses_knight_pawn(&self) -> bool {
        self.power == Some(Power::KnightPawn)
    }

    /// Short notation: `e4`, `dxe5`, `e8=Q`, `fxg1=Q`.
    pub fn notation(&self) -> String {
        let mut s = String::with_capacity(6);
        if self.is_capture() {
            s.push(self.from.file());
            s.push('x');
        }
        s.push_str(&self.to.to_string());
        if self.promotion {
            s.push_str("=Q");
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.promotion {
            write!(f, "=Q")?;
        }
        Ok(())
    }
}
