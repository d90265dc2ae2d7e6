//! Human player implementation that gets moves via square selection.
//!
//! This module provides `HumanPlayer`, which implements the `Player` trait for
//! human players who move by selecting a pawn and then a destination. It owns the
//! presentation-side state the rules engine must not touch: the current selection,
//! the legal moves cached for it, and the power toggles.
//!
//! # Selection Logic
//!
//! - **Piece selected + destination in cached moves**: Confirm that move
//! - **Piece selected + same square again**: Deselect
//! - **Own pawn clicked**: Select it and cache its moves, powers included
//! - **Anything else**: Ignored, the selection stays
//!
//! # Control Flow
//!
//! ```text
//! InputEvent -> Orchestrator::handle_event()
//!     |
//! player.handle_event(state, event)
//!     |
//! pending_move set when a destination is confirmed
//!     |
//! Orchestrator polls player.get_move()
//! ```

use crate::agent::player::{InputEvent, Player};
use crate::game_repr::{GameState, Move, MoveList, MoveReport, Power, PowerToggles, Square};

/// Human player that makes moves via selection input.
pub struct HumanPlayer {
    /// Display name for this player
    name: String,

    /// Currently selected pawn, if any
    selected: Option<Square>,

    /// Legal moves of the selected pawn, refreshed on selection and toggle changes
    legal_moves_cache: MoveList,

    /// Power toggles as shown to the user
    toggles: PowerToggles,

    /// Move completed by the last input, returned by `get_move()`
    pending_move: Option<Move>,
}

impl HumanPlayer {
    pub fn new(name: String) -> Self {
        Self {
            name,
            selected: None,
            legal_moves_cache: MoveList::new(),
            toggles: PowerToggles::default(),
            pending_move: None,
        }
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.legal_moves_cache.clear();
    }

    fn refresh_cache(&mut self, state: &GameState) {
        self.legal_moves_cache.clear();
        if let Some(sq) = self.selected {
            let ctx = state.power_context(sq, self.toggles);
            self.legal_moves_cache = state
                .position
                .moves_from(sq, state.side_to_move, Some(&ctx));
        }
    }

    fn handle_select(&mut self, state: &GameState, sq: Square) {
        if let Some(selected) = self.selected {
            if let Some(mv) = self.legal_moves_cache.iter().find(|m| m.to == sq) {
                self.pending_move = Some(*mv);
                return;
            }
            if selected == sq {
                self.deselect();
                return;
            }
        }

        if state.position.piece_at(sq).is_pawn_of(state.side_to_move) {
            self.selected = Some(sq);
            self.refresh_cache(state);
        }
    }

    fn toggle_power(&mut self, state: &GameState, power: Power) {
        if !state.powers.is_available(state.side_to_move, power) {
            log::warn!("{} is not available to {}", power.name(), self.name);
            self.toggles.set(power, false);
            return;
        }

        let armed = !self.toggles.is_armed(power);
        self.toggles.set(power, armed);
        self.refresh_cache(state);
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, _state: &GameState) -> Option<Move> {
        let mv = self.pending_move.take();
        if mv.is_some() {
            self.deselect();
        }
        mv
    }

    fn handle_event(&mut self, state: &GameState, event: &InputEvent) {
        if state.is_over() {
            return;
        }

        match *event {
            InputEvent::Select(sq) => self.handle_select(state, sq),
            InputEvent::TogglePower(power) => self.toggle_power(state, power),
            InputEvent::Deselect => self.deselect(),
        }
    }

    fn move_applied(&mut self, report: &MoveReport) {
        if let Some(power) = report.power_consumed {
            self.toggles.set(power, false);
        }
        self.deselect();
    }

    fn new_game(&mut self) {
        self.deselect();
        self.toggles = PowerToggles::default();
        self.pending_move = None;
    }

    fn selected(&self) -> Option<Square> {
        self.selected
    }

    fn highlighted_moves(&self) -> &[Move] {
        &self.legal_moves_cache
    }

    fn toggles(&self) -> PowerToggles {
        self.toggles
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
