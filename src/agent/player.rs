//! Player trait and associated types for game agents.
//!
//! This module provides the core abstraction for entities that can provide moves.
//! Different player types (Human, Minimax AI, Random) implement the `Player` trait to
//! participate in games run by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! # Design Philosophy
//!
//! Players never own or share the live game. Every call receives the current
//! [`GameState`] by reference, so an AI searches on its own clones and a human player
//! only keeps presentation state (selection, power toggles).
//!
//! # Synchronous Design
//!
//! `get_move()` is synchronous. The AI computes its move to completion inside the call
//! and a human player simply returns the move their last input completed, if any. The
//! orchestrator polls after every input and keeps polling while AI players are to move,
//! so the automated reply happens in the same logical turn as the human move.

use crate::game_repr::{GameOutcome, GameState, Move, MoveReport, Power, PowerToggles, Square};

/// Abstract input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A square was clicked / typed. Selects a pawn or confirms a destination.
    Select(Square),
    /// Flip the toggle for a power move.
    TogglePower(Power),
    /// Drop the current selection.
    Deselect,
}

/// Trait for entities that can provide moves.
///
/// # Required Methods
///
/// Only `get_move()` must be implemented. All other methods have default implementations
/// that can be overridden as needed.
///
/// ## `get_move()`
/// - **Returns `None`**: No move is ready yet (human still choosing) or no legal move exists
/// - **Returns `Some(Move)`**: A move taken from the legal move list for `state`
///
/// ## `handle_event()`
/// - Default: Does nothing
/// - Override: For interactive players that react to clicks or typed squares
///
/// ## `move_applied()`
/// - Called for every applied move, by either side. Human players use it to disable
///   a power toggle once the power is consumed.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Handle an input event (for interactive players).
    fn handle_event(&mut self, _state: &GameState, _event: &InputEvent) {
        // Default: do nothing (for AI players)
    }

    /// Notify this player that a move was applied to the live game.
    fn move_applied(&mut self, _report: &MoveReport) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _outcome: GameOutcome) {
        // Default: do nothing
    }

    /// Forget any per-game state before a restart or puzzle load.
    fn new_game(&mut self) {}

    /// Currently selected square, for highlighting.
    fn selected(&self) -> Option<Square> {
        None
    }

    /// Moves available from the current selection, for highlighting.
    fn highlighted_moves(&self) -> &[Move] {
        &[]
    }

    /// Power toggles as the user currently sees them.
    fn toggles(&self) -> PowerToggles {
        PowerToggles::default()
    }

    /// Whether this player waits for input instead of computing its move.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
