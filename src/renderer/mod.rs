use crate::game_repr::{Color, Move, Position, PowerToggles, Square};

pub mod text_renderer;

pub use text_renderer::TextRenderer;

/// Snapshot of what the board should show.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub position: &'a Position,
    /// Square that is currently selected
    pub selected: Option<Square>,
    /// Moves available from the selection; their destinations get marked
    pub targets: &'a [Move],
    /// Point of view (White or Black) - determines board orientation
    pub pov: Color,
}

/// Trait for presenting the game.
/// The rules engine never calls it; the front end feeds it from the orchestrator.
pub trait Renderer {
    /// Draw the current board position with selection and move highlights
    fn draw_board(&mut self, view: &BoardView<'_>);

    /// Draw the status headline and the line of detail underneath it
    fn draw_status(&mut self, status: &str, detail: &str);

    /// Draw the numbered move list
    fn draw_move_list(&mut self, lines: &[String]);

    /// Draw the power toggles of the player to move
    fn draw_powers(&mut self, toggles: PowerToggles, super_pawn_used: bool, knight_pawn_used: bool);
}
