//! Game lifecycle management and turn coordination.
//!
//! This module contains the [`Orchestrator`], the root coordinator between the rules
//! engine, the two [`Player`]s and whatever presents the game. It manages:
//! - Player instantiation from a [`GameConfig`]
//! - Game flow (move execution, end detection, restarts and puzzle loads)
//! - Event routing to the player whose turn it is
//! - Move history and the status text shown to the user
//!
//! # Example Flow
//!
//! ```text
//! [start_game] -> [Poll player to move] -> [Player provides move] -> [Apply move]
//!   -> [Notify players] -> [Check end] -> [Poll next player] ...
//! ```
//!
//! An automated player is polled straight after the human move that handed it the
//! turn, so both moves happen within one call to [`Orchestrator::handle_event`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::player::{InputEvent, Player};
use crate::config::{GameConfig, StartPosition};
use crate::game_repr::{
    Color, GameOutcome, GameState, Move, MoveList, MoveReport, ParseError, Position,
    PowerToggles, WinReason,
};
use crate::puzzles::{self, Puzzle};
use crate::renderer::BoardView;

/// Reminder shown under the status line of a normal game.
const RULES_HINT: &str =
    "Win by promotion, capturing all enemy pawns, or leaving your opponent with no legal moves.";

/// Root component managing a game and its two players.
///
/// # Game Flow
///
/// 1. [`handle_event`](Orchestrator::handle_event) forwards input to the player to move
/// 2. [`poll_current_player`](Orchestrator::poll_current_player) asks it for a move
/// 3. [`process_move`](Orchestrator::process_move) checks and applies the move
/// 4. Both players are notified; a finished game goes to
///    [`handle_game_end`](Orchestrator::handle_game_end)
/// 5. Polling continues while the side to move is automated
pub struct Orchestrator {
    config: GameConfig,

    /// The live game. Only ever changed through `GameState::apply_move` or a reset.
    state: GameState,

    /// (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Every applied move, in order
    history: Vec<MoveReport>,

    /// Puzzle the current game started from, if any
    current_puzzle: Option<&'static Puzzle>,

    /// Used for random puzzle picks
    rng: StdRng,
}

impl Orchestrator {
    /// Creates the players described by `config` and starts the first game.
    pub fn new(config: GameConfig) -> Result<Self, ParseError> {
        let white = config.white.create_player(Color::White);
        let black = config.black.create_player(Color::Black);
        Self::with_players(config, white, black)
    }

    /// Starts a game with explicitly supplied players.
    ///
    /// `config` still decides the start position and the power owner.
    pub fn with_players(
        config: GameConfig,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
    ) -> Result<Self, ParseError> {
        let power_owner = config.human_color();
        let mut orchestrator = Self {
            config,
            state: GameState::new(Position::default(), Color::White, power_owner),
            players: (white, black),
            history: Vec::new(),
            current_puzzle: None,
            rng: StdRng::from_entropy(),
        };
        orchestrator.start_game()?;
        Ok(orchestrator)
    }

    /// Reseeds the generator behind random puzzle picks.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Starts a new game from the configured start position.
    pub fn start_game(&mut self) -> Result<(), ParseError> {
        match self.config.start.clone() {
            StartPosition::Standard => {
                self.restart();
                Ok(())
            }
            StartPosition::Puzzle(key) => self.load_puzzle(puzzles::find(&key)?),
            StartPosition::RandomPuzzle => {
                let puzzle = puzzles::random(&mut self.rng);
                self.load_puzzle(puzzle)
            }
        }
    }

    /// Standard start: full pawn ranks, White to move, powers fresh.
    pub fn restart(&mut self) {
        log::info!(
            "New game: {} vs {}",
            self.players.0.name(),
            self.players.1.name()
        );
        let state = GameState::new(Position::default(), Color::White, self.config.human_color());
        self.reset(state, None);
    }

    pub fn load_puzzle(&mut self, puzzle: &'static Puzzle) -> Result<(), ParseError> {
        let position = puzzle.position()?;
        log::info!("Loaded puzzle '{}': {}", puzzle.key, puzzle.title);

        let state = GameState::new(position, puzzle.side_to_move, self.config.human_color());
        self.reset(state, Some(puzzle));
        Ok(())
    }

    /// Loads a puzzle by key, or a random one for `"random"`.
    pub fn load_puzzle_by_key(&mut self, key: &str) -> Result<(), ParseError> {
        let puzzle = if key.eq_ignore_ascii_case("random") {
            puzzles::random(&mut self.rng)
        } else {
            puzzles::find(key)?
        };
        self.load_puzzle(puzzle)
    }

    /// Starts a game from an arbitrary position with fresh powers.
    pub fn load_position(&mut self, position: Position, side_to_move: Color) {
        log::info!("Loaded custom position, {} to move", side_to_move.name());
        let state = GameState::new(position, side_to_move, self.config.human_color());
        self.reset(state, None);
    }

    fn reset(&mut self, state: GameState, puzzle: Option<&'static Puzzle>) {
        self.state = state;
        self.history.clear();
        self.current_puzzle = puzzle;
        self.players.0.new_game();
        self.players.1.new_game();

        // the computer may be the one to open
        self.poll_current_player();
    }

    /// Routes an input event to the player to move, then polls for a move.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.state.is_over() {
            log::warn!("Ignoring {:?}: the game is over", event);
            return;
        }

        let player = player_mut(&mut self.players, self.state.side_to_move);
        if !player.is_interactive() {
            log::warn!("Ignoring {:?}: {} is not waiting for input", event, player.name());
            return;
        }
        player.handle_event(&self.state, &event);

        self.poll_current_player();
    }

    /// Asks the player to move for a move and applies it, repeating while the
    /// side to move is automated.
    pub fn poll_current_player(&mut self) {
        while !self.state.is_over() {
            let player = player_mut(&mut self.players, self.state.side_to_move);
            let interactive = player.is_interactive();

            match player.get_move(&self.state) {
                Some(mv) => {
                    if !self.process_move(mv) {
                        return;
                    }
                }
                None => {
                    if !interactive {
                        self.handle_stuck_computer();
                    }
                    return;
                }
            }
        }
    }

    /// Checks and applies a move for the side to move.
    ///
    /// Returns `false` and leaves the game untouched if the move is not legal here.
    pub fn process_move(&mut self, mv: Move) -> bool {
        if !self.is_legal(mv) {
            log::warn!(
                "Rejected illegal move {} for {}",
                mv,
                self.state.side_to_move.name()
            );
            return false;
        }

        let report = match self.state.apply_move(mv) {
            Some(report) => report,
            None => return false,
        };

        self.players.0.move_applied(&report);
        self.players.1.move_applied(&report);

        let outcome = report.outcome;
        self.history.push(report);

        if outcome.is_over() {
            self.handle_game_end(outcome);
        }
        true
    }

    /// Whether `mv` is one of the moves the side to move could play, powers included.
    pub fn is_legal(&self, mv: Move) -> bool {
        if self.state.is_over() {
            return false;
        }

        let mut toggles = PowerToggles::default();
        if let Some(power) = mv.power {
            toggles.set(power, true);
        }
        let ctx = self.state.power_context(mv.from, toggles);

        self.state
            .position
            .moves_from(mv.from, self.state.side_to_move, Some(&ctx))
            .contains(&mv)
    }

    /// An automated player found nothing to play in a game that is still running.
    ///
    /// The applier already flags this after every move, so this only triggers on
    /// positions that started that way.
    fn handle_stuck_computer(&mut self) {
        if !self.state.legal_moves(None).is_empty() {
            return;
        }

        let outcome = GameOutcome::Decided {
            winner: self.state.side_to_move.opposite(),
            reason: WinReason::NoLegalMoves,
        };
        self.state.outcome = outcome;
        self.handle_game_end(outcome);
    }

    fn handle_game_end(&mut self, outcome: GameOutcome) {
        if let GameOutcome::Decided { winner, reason } = outcome {
            log::info!("{} wins: {}", winner.name(), reason);
        }

        self.players.0.game_ended(outcome);
        self.players.1.game_ended(outcome);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[MoveReport] {
        &self.history
    }

    pub fn current_puzzle(&self) -> Option<&'static Puzzle> {
        self.current_puzzle
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::White => self.players.0.as_ref(),
            Color::Black => self.players.1.as_ref(),
        }
    }

    /// Plain moves for the side to move, for presentation queries.
    pub fn legal_moves(&self) -> MoveList {
        self.state.legal_moves(None)
    }

    /// Numbered move list, one line per full move: `"1. e4  e5"`.
    pub fn move_list(&self) -> Vec<String> {
        self.history
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let first = pair.first().map(|r| r.notation.as_str()).unwrap_or("");
                let second = pair.get(1).map(|r| r.notation.as_str()).unwrap_or("");
                format!("{}. {}  {}", i + 1, first, second)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    pub fn status_line(&self) -> String {
        match self.state.outcome {
            GameOutcome::Decided { winner, reason } => {
                format!("{} wins {}", winner.name(), reason.describe())
            }
            GameOutcome::InProgress => {
                let side = self.state.side_to_move.name();
                match self.current_puzzle {
                    Some(puzzle) => format!("Puzzle: {} – {} to move", puzzle.title, side),
                    None => format!("{} to move", side),
                }
            }
        }
    }

    /// Second line under the status: puzzle description, rules reminder, or power usage.
    pub fn detail_line(&self) -> String {
        if self.state.is_over() {
            let powers = self.state.powers;
            return match (powers.super_pawn_used, powers.knight_pawn_used) {
                (false, false) => String::new(),
                (true, false) => "Super Pawn was used this game.".to_string(),
                (false, true) => "Knight Pawn was used this game.".to_string(),
                (true, true) => "Both powers were used this game.".to_string(),
            };
        }

        match self.current_puzzle {
            Some(puzzle) => puzzle.description.to_string(),
            None => RULES_HINT.to_string(),
        }
    }

    /// What the renderer should draw, seen from the power owner's side.
    pub fn board_view(&self) -> BoardView<'_> {
        let player = self.player(self.state.side_to_move);
        BoardView {
            position: &self.state.position,
            selected: player.selected(),
            targets: player.highlighted_moves(),
            pov: self.config.human_color(),
        }
    }
}

fn player_mut(
    players: &mut (Box<dyn Player>, Box<dyn Player>),
    color: Color,
) -> &mut Box<dyn Player> {
    match color {
        Color::White => &mut players.0,
        Color::Black => &mut players.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::AIType;
    use crate::agent::HumanPlayer;
    use crate::game_repr::{Power, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn click(orch: &mut Orchestrator, s: &str) {
        orch.handle_event(InputEvent::Select(sq(s)));
    }

    #[test]
    fn test_human_move_triggers_ai_reply() {
        let mut orch = Orchestrator::new(GameConfig::default()).unwrap();

        click(&mut orch, "e2");
        click(&mut orch, "e4");

        assert_eq!(orch.history().len(), 2);
        assert_eq!(orch.history()[0].notation, "e4");
        assert_eq!(orch.history()[1].side, Color::Black);
        assert_eq!(orch.state().side_to_move, Color::White);
        assert_eq!(orch.move_list().len(), 1);
    }

    #[test]
    fn test_pvp_move_list_and_status() {
        let mut orch = Orchestrator::new(GameConfig::pvp()).unwrap();
        assert_eq!(orch.status_line(), "White to move");
        assert_eq!(orch.detail_line(), RULES_HINT);

        click(&mut orch, "e2");
        click(&mut orch, "e4");
        assert_eq!(orch.status_line(), "Black to move");
        assert_eq!(orch.move_list(), vec!["1. e4".to_string()]);

        click(&mut orch, "d7");
        click(&mut orch, "d5");
        click(&mut orch, "e4");
        click(&mut orch, "d5");
        assert_eq!(
            orch.move_list(),
            vec!["1. e4  d5".to_string(), "2. exd5".to_string()]
        );
    }

    #[test]
    fn test_ai_opens_when_human_plays_black() {
        let orch = Orchestrator::new(GameConfig::pvai(Color::Black, AIType::Minimax)).unwrap();
        assert_eq!(orch.history().len(), 1);
        assert_eq!(orch.state().side_to_move, Color::Black);
        assert_eq!(orch.state().powers.owner, Color::Black);
    }

    #[test]
    fn test_puzzle_status_and_reset() {
        let config = GameConfig::pvp().with_start(StartPosition::Puzzle("race".to_string()));
        let mut orch = Orchestrator::new(config).unwrap();
        assert_eq!(orch.status_line(), "Puzzle: Pawn race – White to move");
        assert_eq!(orch.detail_line(), orch.current_puzzle().unwrap().description);

        click(&mut orch, "a2");
        click(&mut orch, "a4");
        assert_eq!(orch.history().len(), 1);

        orch.restart();
        assert!(orch.history().is_empty());
        assert!(orch.current_puzzle().is_none());
        assert_eq!(orch.state().position, Position::default());
    }

    #[test]
    fn test_unknown_puzzle_is_an_error() {
        let mut orch = Orchestrator::new(GameConfig::pvp()).unwrap();
        assert_eq!(
            orch.load_puzzle_by_key("nope"),
            Err(ParseError::UnknownPuzzle("nope".to_string()))
        );
        assert!(orch.current_puzzle().is_none());

        orch.seed_rng(3);
        orch.load_puzzle_by_key("random").unwrap();
        assert!(orch.current_puzzle().is_some());
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut orch = Orchestrator::new(GameConfig::pvp()).unwrap();
        let bogus = Move::new(sq("e2"), sq("e5"), crate::game_repr::MoveType::Normal, false);
        assert!(!orch.process_move(bogus));
        assert!(orch.history().is_empty());

        // powers are owned by White only
        click(&mut orch, "e2");
        click(&mut orch, "e3");
        orch.handle_event(InputEvent::TogglePower(Power::SuperPawn));
        assert!(!orch.player(Color::Black).toggles().super_pawn);
    }

    #[test]
    fn test_promotion_ends_game_and_blocks_input() {
        let config = GameConfig::pvp();
        let mut orch = Orchestrator::with_players(
            config,
            Box::new(HumanPlayer::new("White".to_string())),
            Box::new(HumanPlayer::new("Black".to_string())),
        )
        .unwrap();

        // white breaks through on the queenside first
        for (from, to) in [
            ("b2", "b4"), ("g7", "g5"),
            ("b4", "b5"), ("g5", "g4"),
            ("b5", "b6"), ("g4", "g3"),
            ("b6", "c7"), ("g3", "h2"),
            ("c7", "c8"),
        ] {
            click(&mut orch, from);
            click(&mut orch, to);
        }

        assert_eq!(
            orch.outcome(),
            GameOutcome::Decided {
                winner: Color::White,
                reason: WinReason::Promotion
            }
        );
        assert_eq!(orch.status_line(), "White wins by promotion");
        assert_eq!(orch.history().last().unwrap().notation, "c8=Q");

        let moves_before = orch.history().len();
        click(&mut orch, "a7");
        click(&mut orch, "a6");
        assert_eq!(orch.history().len(), moves_before);
        assert!(orch.legal_moves().is_empty());
    }

    #[test]
    fn test_frozen_computer_loses_at_start() {
        let mut orch = Orchestrator::new(GameConfig::pvai(Color::White, AIType::Minimax)).unwrap();

        // a7 is blocked by a6 and has nothing to capture
        let frozen = Position::from_rows(&[
            "........", "p.......", "P.......", "........",
            "........", "........", ".......P", "........",
        ])
        .unwrap();
        orch.load_position(frozen, Color::Black);

        assert_eq!(
            orch.outcome(),
            GameOutcome::Decided {
                winner: Color::White,
                reason: WinReason::NoLegalMoves
            }
        );
        assert!(orch.history().is_empty());
        assert_eq!(
            orch.status_line(),
            "White wins because the opponent has no legal moves"
        );

        // the finished game takes no more input
        click(&mut orch, "h2");
        click(&mut orch, "h3");
        assert!(orch.history().is_empty());
    }

    #[test]
    fn test_super_pawn_through_orchestrator() {
        let mut orch = Orchestrator::new(GameConfig::pvp()).unwrap();

        orch.handle_event(InputEvent::TogglePower(Power::SuperPawn));
        click(&mut orch, "d2");
        click(&mut orch, "c3");

        let report = orch.history().last().unwrap();
        assert_eq!(report.power_consumed, Some(Power::SuperPawn));
        assert!(orch.state().powers.super_pawn_used);
        assert!(!orch.player(Color::White).toggles().super_pawn);
        assert_eq!(orch.detail_line(), RULES_HINT);
    }
}
