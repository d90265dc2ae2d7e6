mod error;
mod game_state;
mod moves;
mod piece;
mod position;
mod square;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use error::*;
pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
pub use piece_moves::*;
