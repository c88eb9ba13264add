//! Move validation.
//!
//! Pure and deterministic: the same `(state, roll)` always yields the same
//! legal set. The turn controller publishes this set; hosts gate input on
//! it and `choose_move` rejects anything outside it.

use rustc_hash::FxHashSet;

use crate::core::{GameState, Position, Seat, Token, TokenId};
use crate::rules::board::{relative_index, HOME_ENTRY_RELATIVE, HOME_GOAL_INDEX};

/// Check whether one token has a legal move for the given roll.
///
/// Legality per position kind:
/// - `Yard`: only a 6 brings a token out.
/// - `Track`: always legal unless the move would overshoot the home lane
///   (past relative cell 50, the landing lane index must not exceed the
///   goal index 5).
/// - `HomePath`: the landing index must not exceed the goal index.
/// - `Home`: terminal, never legal.
///
/// A token not owned by `current_player` is never legal.
#[must_use]
pub fn can_move(token: &Token, current_player: Seat, roll: u8) -> bool {
    if token.owner != current_player {
        return false;
    }

    match token.position {
        Position::Yard => roll == 6,
        Position::Track(index) => {
            let relative = relative_index(index, token.owner);
            if relative + roll > HOME_ENTRY_RELATIVE {
                let steps_into_home = relative + roll - HOME_ENTRY_RELATIVE;
                let target_home_index = steps_into_home - 1;
                target_home_index <= HOME_GOAL_INDEX
            } else {
                true
            }
        }
        Position::HomePath(index) => index + roll <= HOME_GOAL_INDEX,
        Position::Home => false,
    }
}

/// The current player's tokens that have a legal move for `roll`.
#[must_use]
pub fn movable_tokens(state: &GameState, roll: u8) -> FxHashSet<TokenId> {
    let current = state.current_player();
    state
        .tokens()
        .iter()
        .filter(|token| can_move(token, current, roll))
        .map(|token| token.id)
        .collect()
}
