//! Board geometry: the shared loop, home-entry boundary, and safe cells.

use crate::core::Seat;

/// Cells in the shared track loop (global indices 0..=51).
pub const TRACK_LEN: u8 = 52;

/// A token on relative cell 50 steps into its home lane next; relative 51
/// is never occupied.
pub const HOME_ENTRY_RELATIVE: u8 = 50;

/// Home lane index that finishes a token. Lane cells 0..=4 are occupiable;
/// a step reaching index 5 completes the token.
pub const HOME_GOAL_INDEX: u8 = 5;

/// Track cells where tokens cannot be captured: the four seat entry cells
/// plus the cell 8 steps ahead of each.
pub const SAFE_CELLS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Check whether a global track index is a safe cell.
#[must_use]
pub fn is_safe_cell(index: u8) -> bool {
    SAFE_CELLS.contains(&index)
}

/// Convert a global track index to the given seat's own coordinates
/// (0 at the seat's entry cell, 51 just behind it).
#[must_use]
pub fn relative_index(track_index: u8, seat: Seat) -> u8 {
    (track_index + TRACK_LEN - seat.start_offset()) % TRACK_LEN
}
