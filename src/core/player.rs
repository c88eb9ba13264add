//! Seat identities.
//!
//! ## Seat
//!
//! One of the four fixed board identities, in canonical turn order:
//! Green, Yellow, Blue, Red. A game activates the first N seats,
//! N in 2..=4, fixed for the game's lifetime.
//!
//! The seat enum is part of the engine's public contract: token ownership,
//! captures and the winner are all keyed by it. The color name it carries is
//! a presentation concern, but identity and ordering are rule-relevant
//! (each seat's track entry cell is derived from its position in the order).

use serde::{Deserialize, Serialize};

/// A fixed board identity (seat 0..3).
///
/// Seats are evenly spaced around the 52-cell track: each seat's entry cell
/// is 13 cells after the previous seat's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    Green = 0,
    Yellow = 1,
    Blue = 2,
    Red = 3,
}

/// Total number of seats on the board (active games use the first 2..=4).
pub const SEAT_COUNT: usize = 4;

impl Seat {
    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a seat by index.
    ///
    /// Returns `None` for indices outside 0..=3.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Green),
            1 => Some(Seat::Yellow),
            2 => Some(Seat::Blue),
            3 => Some(Seat::Red),
            _ => None,
        }
    }

    /// Iterate over the first `player_count` seats in canonical order.
    ///
    /// ```
    /// use ludo_engine::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all(3).collect();
    /// assert_eq!(seats, vec![Seat::Green, Seat::Yellow, Seat::Blue]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        assert!(player_count <= SEAT_COUNT, "At most 4 seats supported");
        (0..player_count).map(|i| Seat::from_index(i).unwrap())
    }

    /// Display name of the seat; also serves as its color tag for hosts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Seat::Green => "Green",
            Seat::Yellow => "Yellow",
            Seat::Blue => "Blue",
            Seat::Red => "Red",
        }
    }

    /// The global track cell where this seat's tokens enter from the yard.
    ///
    /// Entry cells are 13 apart: 0, 13, 26, 39.
    #[must_use]
    pub const fn start_offset(self) -> u8 {
        (self as u8) * 13
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
