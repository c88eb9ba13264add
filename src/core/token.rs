//! Token identity and per-token state.
//!
//! ## ID layout
//!
//! Token ids are dense and assigned once at game start: seat `s` owns ids
//! `4s .. 4s + 4`. In a game with `player_count` active seats the valid ids
//! are `0 .. 4 * player_count`. Ids double as indices into the game's token
//! vector, so lookups are O(1).

use serde::{Deserialize, Serialize};

use super::player::Seat;
use super::position::Position;

/// Number of tokens each seat owns, for the whole game.
pub const TOKENS_PER_SEAT: usize = 4;

/// Unique identifier for a token.
///
/// Stable for the game's lifetime; tokens are never created or destroyed
/// after `start`, they only change position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// ID of the `slot`-th token (0..4) owned by `seat`.
    #[must_use]
    pub const fn of(seat: Seat, slot: u8) -> Self {
        Self(seat as u8 * TOKENS_PER_SEAT as u8 + slot)
    }

    /// Get the raw index into the game's token vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// A single playing token: identity, owner, and current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Unique id, stable for the game's lifetime.
    pub id: TokenId,
    /// The seat this token belongs to.
    pub owner: Seat,
    /// Where the token currently sits.
    pub position: Position,
}

impl Token {
    /// Create a fresh token in the yard.
    #[must_use]
    pub const fn new(id: TokenId, owner: Seat) -> Self {
        Self {
            id,
            owner,
            position: Position::Yard,
        }
    }

    /// A token has completed once it reaches `Home`.
    #[must_use]
    pub const fn has_completed(&self) -> bool {
        self.position.is_home()
    }
}
