pub mod agent;
pub mod cli;
pub mod config;
pub mod game_repr;
pub mod orchestrator;
pub mod puzzles;
pub mod renderer;
