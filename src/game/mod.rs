//! Core Connect Four game logic: bitboard position, player types, and game
//! state machine with immutable transitions.

mod player;
mod position;
mod state;

pub use player::Player;
pub use position::{Position, HEIGHT, MAX_STONES, WIDTH};
pub use state::{GameOutcome, GameState};
