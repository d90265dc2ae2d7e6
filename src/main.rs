use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use pawn_lab::agent::InputEvent;
use pawn_lab::cli::{Cli, GameCommand};
use pawn_lab::game_repr::Power;
use pawn_lab::orchestrator::Orchestrator;
use pawn_lab::puzzles::PUZZLES;
use pawn_lab::renderer::{text_renderer, Renderer, TextRenderer};

fn draw<R: Renderer>(renderer: &mut R, orch: &Orchestrator) {
    let state = orch.state();
    let toggles = orch.player(state.powers.owner).toggles();

    renderer.draw_board(&orch.board_view());
    renderer.draw_powers(
        toggles,
        state.powers.super_pawn_used,
        state.powers.knight_pawn_used,
    );
    renderer.draw_status(&orch.status_line(), &orch.detail_line());
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config();
    log::debug!("Starting with {:?}", config);

    let mut orch = Orchestrator::new(config)?;
    let mut renderer = TextRenderer::new(io::stdout()).show_coords(!cli.no_coords);

    println!("Type a square to select or move, or 'help' for commands.");
    println!("Pieces: {}", text_renderer::legend());
    draw(&mut renderer, &orch);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Help output also arrives as an error
        let cmd = match line.parse::<GameCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match cmd {
            GameCommand::Select { square } => orch.handle_event(InputEvent::Select(square)),
            GameCommand::Super => orch.handle_event(InputEvent::TogglePower(Power::SuperPawn)),
            GameCommand::Knight => orch.handle_event(InputEvent::TogglePower(Power::KnightPawn)),
            GameCommand::Clear => orch.handle_event(InputEvent::Deselect),
            GameCommand::Restart => orch.restart(),
            GameCommand::Puzzle { key } => {
                if let Err(e) = orch.load_puzzle_by_key(&key) {
                    log::warn!("{}", e);
                    println!("{}", e);
                    continue;
                }
            }
            GameCommand::Puzzles => {
                for puzzle in PUZZLES {
                    println!("  {:<10} {}", puzzle.key, puzzle.title);
                }
                continue;
            }
            GameCommand::Moves => {
                renderer.draw_move_list(&orch.move_list());
                continue;
            }
            GameCommand::Coords => {
                renderer.toggle_coords();
            }
            GameCommand::Quit => break,
        }

        draw(&mut renderer, &orch);
        io::stdout().flush()?;
    }

    Ok(())
}
