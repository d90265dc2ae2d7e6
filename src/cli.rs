//! Command-line surface of the terminal front end.
//!
//! [`Cli`] holds the launch options and turns them into a [`GameConfig`].
//! [`GameCommand`] is one line typed at the prompt while a game is running.

use std::str::FromStr;

use clap::{builder::PossibleValue, Parser, ValueEnum};

use crate::agent::ai::AIType;
use crate::config::{GameConfig, StartPosition};
use crate::game_repr::{Color, ParseError, Square};
use crate::puzzles;

/// Who controls the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Two humans sharing the prompt
    #[value(alias = "hotseat")]
    Pvp,
    /// A human against the computer
    #[default]
    Pvai,
    /// The computer plays both sides
    #[value(alias = "watch")]
    Aivai,
}

/// Launch options.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pawn_lab",
    version,
    about = "Pawn-only chess with one-shot Super Pawn and Knight Pawn powers"
)]
pub struct Cli {
    /// Who controls the two sides.
    #[arg(short, long, value_enum, default_value_t = Mode::Pvai)]
    pub mode: Mode,

    /// The side the human plays against the computer.
    #[arg(short, long, value_enum, default_value_t = Color::White)]
    pub color: Color,

    /// The computer opponent. In `aivai` mode it plays both sides.
    #[arg(short, long, value_enum, default_value_t = AIType::Minimax)]
    pub ai: AIType,

    /// Start from a puzzle, by key, or `random` for a new pick on every restart.
    #[arg(short, long, value_parser = parse_start)]
    pub puzzle: Option<StartPosition>,

    /// Hide the rank and file labels around the board.
    #[arg(long, default_value = "false")]
    pub no_coords: bool,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        let config = match self.mode {
            Mode::Pvp => GameConfig::pvp(),
            Mode::Pvai => GameConfig::pvai(self.color, self.ai),
            Mode::Aivai => GameConfig::aivai(self.ai, self.ai),
        };
        config.with_start(self.puzzle.clone().unwrap_or_default())
    }
}

fn parse_start(s: &str) -> Result<StartPosition, ParseError> {
    if s.eq_ignore_ascii_case("random") {
        return Ok(StartPosition::RandomPuzzle);
    }
    let puzzle = puzzles::find(s)?;
    Ok(StartPosition::Puzzle(puzzle.key.to_string()))
}

/// A command typed at the prompt during a game.
///
/// A bare square such as `e2` is shorthand for `select e2`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    rename_all = "lower",
    override_usage("<SQUARE> | <COMMAND>")
)]
pub enum GameCommand {
    /// Select a pawn, or move the selected pawn to one of its highlighted squares.
    #[command(alias = "s")]
    Select { square: Square },

    /// Arm or disarm the Super Pawn power.
    #[command(alias = "superpawn")]
    Super,

    /// Arm or disarm the Knight Pawn power.
    #[command(alias = "knightpawn")]
    Knight,

    /// Drop the current selection.
    #[command(alias = "deselect")]
    Clear,

    /// Start a new game from the standard position.
    #[command(alias = "new")]
    Restart,

    /// Load a puzzle by key.
    Puzzle {
        #[arg(default_value = "random")]
        key: String,
    },

    /// List the puzzles.
    Puzzles,

    /// Print the move list.
    Moves,

    /// Show or hide the rank and file labels.
    Coords,

    /// Leave the game.
    #[command(aliases = ["exit", "q"])]
    Quit,
}

impl FromStr for GameCommand {
    type Err = clap::Error;

    /// Parses a prompt line, falling back to a bare square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::try_parse_from(s.split_ascii_whitespace()) {
            Ok(cmd) => Ok(cmd),
            Err(e) => match s.trim().parse::<Square>() {
                Ok(square) => Ok(Self::Select { square }),
                Err(_) => Err(e),
            },
        }
    }
}

impl ValueEnum for Color {
    fn value_variants<'a>() -> &'a [Self] {
        &[Color::White, Color::Black]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            Color::White => PossibleValue::new("white").alias("w"),
            Color::Black => PossibleValue::new("black").alias("b"),
        };
        Some(value)
    }
}

impl ValueEnum for AIType {
    fn value_variants<'a>() -> &'a [Self] {
        AIType::all()
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            AIType::Minimax => PossibleValue::new("minimax").alias("ai"),
            AIType::Random => PossibleValue::new("random"),
        };
        Some(value.help(self.description()))
    }
}
