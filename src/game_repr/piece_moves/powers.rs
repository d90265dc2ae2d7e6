use crate::game_repr::{Color, Move, MoveList, MoveType, Position, Power, Square};

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Per-game record of which one-shot powers the owning side has spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerFlags {
    /// The only side allowed to use powers.
    pub owner: Color,
    pub super_pawn_used: bool,
    pub knight_pawn_used: bool,
}

impl Default for PowerFlags {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl PowerFlags {
    pub fn new(owner: Color) -> Self {
        Self {
            owner,
            super_pawn_used: false,
            knight_pawn_used: false,
        }
    }

    pub fn is_used(&self, power: Power) -> bool {
        match power {
            Power::SuperPawn => self.super_pawn_used,
            Power::KnightPawn => self.knight_pawn_used,
        }
    }

    pub fn is_available(&self, side: Color, power: Power) -> bool {
        side == self.owner && !self.is_used(power)
    }

    /// Marks the power spent. Returns `true` only on the first consumption.
    pub fn consume(&mut self, power: Power) -> bool {
        let was_used = self.is_used(power);
        match power {
            Power::SuperPawn => self.super_pawn_used = true,
            Power::KnightPawn => self.knight_pawn_used = true,
        }
        !was_used
    }
}

/// Which powers the presentation layer has switched on for the next move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerToggles {
    pub super_pawn: bool,
    pub knight_pawn: bool,
}

impl PowerToggles {
    pub fn is_armed(&self, power: Power) -> bool {
        match power {
            Power::SuperPawn => self.super_pawn,
            Power::KnightPawn => self.knight_pawn,
        }
    }

    pub fn set(&mut self, power: Power, armed: bool) {
        match power {
            Power::SuperPawn => self.super_pawn = armed,
            Power::KnightPawn => self.knight_pawn = armed,
        }
    }
}

/// Everything move generation needs to decide whether to offer power moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerContext {
    /// Powers apply to this pawn only.
    pub selected: Square,
    pub toggles: PowerToggles,
    pub flags: PowerFlags,
}

impl PowerContext {
    pub fn allows(&self, sq: Square, side: Color, power: Power) -> bool {
        sq == self.selected && self.toggles.is_armed(power) && self.flags.is_available(side, power)
    }
}

impl Position {
    /// Super Pawn steps first, then Knight Pawn jumps. Targets must be empty or hold an
    /// enemy pawn; enemy queens block.
    pub fn power_moves_into(
        &self,
        sq: Square,
        side: Color,
        ctx: &PowerContext,
        moves: &mut MoveList,
    ) {
        if ctx.allows(sq, side, Power::SuperPawn) {
            self.offset_moves_into(sq, side, &KING_STEPS, Power::SuperPawn, moves);
        }
        if ctx.allows(sq, side, Power::KnightPawn) {
            self.offset_moves_into(sq, side, &KNIGHT_JUMPS, Power::KnightPawn, moves);
        }
    }

    fn offset_moves_into(
        &self,
        sq: Square,
        side: Color,
        offsets: &[(i8, i8)],
        power: Power,
        moves: &mut MoveList,
    ) {
        for &(d_row, d_col) in offsets {
            let Some(target) = sq.offset(d_row, d_col) else {
                continue;
            };
            let target_piece = self.piece_at(target);

            let move_type = if target_piece.is_none() {
                MoveType::Normal
            } else if target_piece.is_pawn_of(side.opposite()) {
                MoveType::Capture
            } else {
                continue;
            };

            let promotion = target.row == side.promotion_row();
            moves.push(Move::new(sq, target, move_type, promotion).with_power(power));
        }
    }
}
