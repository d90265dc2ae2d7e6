//! Game state and the move applier.
//!
//! [`GameState`] bundles the board, side to move, power flags and outcome. It is only
//! mutated through [`GameState::apply_move`]. Search works on [`simulate`], which clones
//! the position before touching it so the live game is never aliased.

use std::fmt;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    Promotion,
    AllPawnsCaptured,
    NoLegalMoves,
}

impl WinReason {
    pub fn describe(&self) -> &'static str {
        match self {
            WinReason::Promotion => "by promotion",
            WinReason::AllPawnsCaptured => "by capturing all enemy pawns",
            WinReason::NoLegalMoves => "because the opponent has no legal moves",
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinReason::Promotion => "promotion",
            WinReason::AllPawnsCaptured => "all pawns captured",
            WinReason::NoLegalMoves => "opponent has no legal moves",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Decided { winner: Color, reason: WinReason },
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        matches!(self, GameOutcome::Decided { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Decided { winner, .. } => Some(*winner),
            GameOutcome::InProgress => None,
        }
    }
}

/// Terminal check after `mover` played `mv` on `pos`, first match wins:
/// promotion, then the opponent out of pawns, then the opponent without a plain move.
pub fn outcome_after(pos: &Position, mv: &Move, mover: Color) -> GameOutcome {
    let opponent = mover.opposite();

    let reason = if mv.promotion {
        Some(WinReason::Promotion)
    } else if pos.count_pawns(opponent) == 0 {
        Some(WinReason::AllPawnsCaptured)
    } else if !pos.has_legal_moves(opponent) {
        Some(WinReason::NoLegalMoves)
    } else {
        None
    };

    match reason {
        Some(reason) => GameOutcome::Decided {
            winner: mover,
            reason,
        },
        None => GameOutcome::InProgress,
    }
}

/// Result of playing a move on a scratch copy of a position.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub position: Position,
    pub outcome: GameOutcome,
}

/// Plays `mv` for `side` on a clone of `pos`. Power flags are not touched.
pub fn simulate(pos: &Position, mv: Move, side: Color) -> Simulation {
    let mut position = pos.clone();
    position.mk_move(mv);
    let outcome = outcome_after(&position, &mv, side);
    Simulation { position, outcome }
}

/// What a single state transition did, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub side: Color,
    pub mv: Move,
    pub notation: String,
    /// Set when this move spent a power; the owner of the toggle should disable it.
    pub power_consumed: Option<Power>,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    pub side_to_move: Color,
    pub powers: PowerFlags,
    pub outcome: GameOutcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Position::default(), Color::White, Color::White)
    }
}

impl GameState {
    pub fn new(position: Position, side_to_move: Color, power_owner: Color) -> Self {
        Self {
            position,
            side_to_move,
            powers: PowerFlags::new(power_owner),
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.position.en_passant
    }

    /// Builds the context handed to move generation for a selected pawn.
    pub fn power_context(&self, selected: Square, toggles: PowerToggles) -> PowerContext {
        PowerContext {
            selected,
            toggles,
            flags: self.powers,
        }
    }

    /// Moves for the side to move; an empty list once the game is decided.
    pub fn legal_moves(&self, powers: Option<&PowerContext>) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        self.position.legal_moves(self.side_to_move, powers)
    }

    /// Applies an already-legal move for the side to move.
    ///
    /// Returns `None` without touching anything if the game is already decided.
    /// The side to move flips even when this move ends the game.
    pub fn apply_move(&mut self, mv: Move) -> Option<MoveReport> {
        if self.is_over() {
            return None;
        }

        let side = self.side_to_move;

        let power_consumed = mv
            .power
            .filter(|&power| self.powers.consume(power));

        self.position.mk_move(mv);
        self.outcome = outcome_after(&self.position, &mv, side);
        self.side_to_move = side.opposite();

        log::debug!("{} played {} -> {:?}", side.name(), mv.notation(), self.outcome);

        Some(MoveReport {
            side,
            mv,
            notation: mv.notation(),
            power_consumed,
            outcome: self.outcome,
        })
    }
}
