//! Core value types: seats, positions, tokens, game state, dice.
//!
//! These are the immutable-shape building blocks the rules and the turn
//! controller operate on. Nothing here decides legality; that lives in
//! `rules`.

pub mod player;
pub mod position;
pub mod rng;
pub mod state;
pub mod token;

pub use player::{Seat, SEAT_COUNT};
pub use position::{MovePath, Position};
pub use rng::{DiceRng, DieSource, ScriptedDie};
pub use state::GameState;
pub use token::{Token, TokenId, TOKENS_PER_SEAT};
