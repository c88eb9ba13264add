//! # ludo-engine
//!
//! A deterministic rule engine for a four-seat Ludo variant (2-4 players,
//! 4 tokens each). The engine owns the canonical game state, validates and
//! executes moves, resolves captures, and detects victory. Everything else
//! (rendering, coordinate mapping, animation timing, haptics, menus) is a
//! host concern: hosts read [`LudoEngine::snapshot`] and drive the engine
//! through three commands.
//!
//! ## Design Principles
//!
//! 1. **One writer**: a single `GameState` is exclusively owned by the turn
//!    controller; every other component reads it by reference and returns
//!    pure values.
//!
//! 2. **Synchronous, atomic commands**: `start`, `roll`, and `choose_move`
//!    commit final state before returning. Staged visual playback is a
//!    host-side replay of the path a move returns, never engine timing.
//!
//! 3. **Deterministic**: dice come from a seeded stream behind the
//!    [`DieSource`] seam, so whole games are reproducible.
//!
//! ## Modules
//!
//! - `core`: seats, positions, tokens, game state, dice
//! - `rules`: move validation, path resolution, capture resolution
//! - `engine`: the turn controller and command errors
//!
//! ## Rules summary
//!
//! Tokens travel the shared 52-cell loop from their seat's entry cell
//! (seats enter 13 cells apart), then turn off into a private 6-cell home
//! lane. A 6 is needed to leave the yard and grants the right to roll
//! again. Landing on an opposing token captures it back to its yard unless
//! the cell is one of the 8 safe cells. First seat with all 4 tokens home
//! wins.

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DieSource, GameState, MovePath, Position, ScriptedDie, Seat, Token, TokenId,
    SEAT_COUNT, TOKENS_PER_SEAT,
};

pub use crate::rules::{
    can_move, captured_tokens, is_safe_cell, movable_tokens, next_step, relative_index,
    resolve_path, HOME_GOAL_INDEX, SAFE_CELLS, TRACK_LEN,
};

pub use crate::engine::{InvalidTransition, LudoEngine, TurnPhase};
