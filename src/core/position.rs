//! Board positions.
//!
//! A token is always in exactly one of four places: its yard, somewhere on
//! the shared 52-cell track, somewhere on its owner's private 6-cell home
//! lane, or finished. The track uses one global coordinate space shared by
//! all seats; the home lane index is local to the owning seat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The ordered sequence of positions a token visits during one move, last
/// element being the resting position.
///
/// A roll is at most 6, so paths never spill to the heap.
pub type MovePath = SmallVec<[Position; 6]>;

/// Where a token currently sits.
///
/// ## Variants
///
/// - `Yard`: not yet on the track.
/// - `Track(index)`: global track cell in 0..=51.
/// - `HomePath(index)`: owner-private lane cell in 0..=5. Index 5 is the
///   goal; the engine completes a token to [`Position::Home`] the moment a
///   step reaches it, so a resting position on index 5 is never observed.
/// - `Home`: terminal, the token has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Yard,
    Track(u8),
    HomePath(u8),
    Home,
}

impl Position {
    /// Check whether this is the terminal `Home` position.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }

    /// Get the global track index, if the token is on the shared track.
    #[must_use]
    pub const fn track_index(self) -> Option<u8> {
        match self {
            Position::Track(index) => Some(index),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Yard => write!(f, "Yard"),
            Position::Track(i) => write!(f, "Track({i})"),
            Position::HomePath(i) => write!(f, "HomePath({i})"),
            Position::Home => write!(f, "Home"),
        }
    }
}
