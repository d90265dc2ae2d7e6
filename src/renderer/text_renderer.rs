//! Plain-text renderer used by the terminal front end.
//!
//! Cells are three characters wide. The selected pawn is bracketed, quiet
//! destinations show `*` and captures show `x` around the victim.

use std::io::Write;

use super::{BoardView, Renderer};
use crate::game_repr::{Color, Piece, PowerToggles, Square};

pub struct TextRenderer<W: Write> {
    out: W,
    show_coords: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_coords: true,
        }
    }

    pub fn show_coords(mut self, show: bool) -> Self {
        self.show_coords = show;
        self
    }

    /// Flips the rank and file labels, returning whether they are now shown.
    pub fn toggle_coords(&mut self) -> bool {
        self.show_coords = !self.show_coords;
        self.show_coords
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}

/// Renders the board to a string, rank 8 first when viewed from White.
pub fn render_board(view: &BoardView<'_>, show_coords: bool) -> String {
    let rows: Vec<u8> = match view.pov {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };
    let cols: Vec<u8> = match view.pov {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    let mut out = String::new();
    for &row in &rows {
        if show_coords {
            out.push_str(&format!("{} ", 8 - row));
        }
        for &col in &cols {
            out.push_str(&cell(view, Square::new(row, col)));
        }
        out.push('\n');
    }

    if show_coords {
        out.push_str("  ");
        for &col in &cols {
            out.push(' ');
            out.push((b'a' + col) as char);
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

fn cell(view: &BoardView<'_>, sq: Square) -> String {
    let piece = view.position.piece_at(sq);
    let glyph = if piece.is_none() { '.' } else { piece.to_char() };

    if view.selected == Some(sq) {
        return format!("[{}]", glyph);
    }

    match view.targets.iter().find(|m| m.to == sq) {
        Some(mv) if mv.is_capture() && !mv.is_en_passant() => format!("x{}x", glyph),
        Some(_) => " * ".to_string(),
        None => format!(" {} ", glyph),
    }
}

fn power_label(name: &str, armed: bool, used: bool) -> String {
    let state = if used {
        "used"
    } else if armed {
        "on"
    } else {
        "off"
    };
    format!("{}: {}", name, state)
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_board(&mut self, view: &BoardView<'_>) {
        let text = render_board(view, self.show_coords);
        self.emit(&text);
    }

    fn draw_status(&mut self, status: &str, detail: &str) {
        let mut text = format!("{}\n", status);
        if !detail.is_empty() {
            text.push_str(detail);
            text.push('\n');
        }
        self.emit(&text);
    }

    fn draw_move_list(&mut self, lines: &[String]) {
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        self.emit(&text);
    }

    fn draw_powers(&mut self, toggles: PowerToggles, super_pawn_used: bool, knight_pawn_used: bool) {
        let text = format!(
            "{}  {}\n",
            power_label("Super Pawn", toggles.super_pawn, super_pawn_used),
            power_label("Knight Pawn", toggles.knight_pawn, knight_pawn_used),
        );
        self.emit(&text);
    }
}

/// Piece glyph legend printed by the front end's help text.
pub fn legend() -> String {
    let pieces = [
        Piece::pawn(Color::White),
        Piece::queen(Color::White),
        Piece::pawn(Color::Black),
        Piece::queen(Color::Black),
    ];
    let names = ["White pawn", "White queen", "Black pawn", "Black queen"];
    pieces
        .iter()
        .zip(names)
        .map(|(p, name)| format!("{} {}", p.to_char(), name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Move, Position};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_white_view() {
        let pos = Position::default();
        let view = BoardView {
            position: &pos,
            selected: None,
            targets: &[],
            pov: Color::White,
        };
        let text = render_board(&view, true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "7  p  p  p  p  p  p  p  p ");
        assert_eq!(lines[6], "2  P  P  P  P  P  P  P  P ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn test_black_view_is_flipped() {
        let pos = Position::from_rows(&[
            "........", "........", "........", "........",
            "........", "........", "........", "P.......",
        ])
        .unwrap();
        let view = BoardView {
            position: &pos,
            selected: None,
            targets: &[],
            pov: Color::Black,
        };
        let text = render_board(&view, false);
        let first = text.lines().next().unwrap();
        assert_eq!(first, " .  .  .  .  .  .  .  P ");
    }

    #[test]
    fn test_selection_and_targets_marked() {
        let pos = Position::from_rows(&[
            "........", "........", "........", "p.......",
            ".P......", "........", "........", "........",
        ])
        .unwrap();
        let moves: Vec<Move> = pos.moves_from(sq("b4"), Color::White, None).to_vec();
        let view = BoardView {
            position: &pos,
            selected: Some(sq("b4")),
            targets: &moves,
            pov: Color::White,
        };
        let text = render_board(&view, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[3], "xpx *  .  .  .  .  .  . ");
        assert_eq!(lines[4], " . [P] .  .  .  .  .  . ");
    }

    #[test]
    fn test_writer_receives_status_and_moves() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.draw_status("White to move", "");
        renderer.draw_move_list(&["1. e4  e5".to_string()]);
        renderer.draw_powers(PowerToggles::default(), true, false);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "White to move\n1. e4  e5\nSuper Pawn: used  Knight Pawn: off\n");
    }

    #[test]
    fn test_coords_toggle() {
        let pos = Position::default();
        let view = BoardView {
            position: &pos,
            selected: None,
            targets: &[],
            pov: Color::White,
        };

        let mut renderer = TextRenderer::new(Vec::new()).show_coords(false);
        renderer.draw_board(&view);
        assert!(renderer.toggle_coords());
        renderer.draw_board(&view);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8 + 9);
        assert_eq!(lines[1], " p  p  p  p  p  p  p  p ");
        assert_eq!(lines[9], "7  p  p  p  p  p  p  p  p ");
    }

    #[test]
    fn test_legend_lists_all_glyphs() {
        assert_eq!(
            legend(),
            "P White pawn, Q White queen, p Black pawn, q Black queen"
        );
    }
}
