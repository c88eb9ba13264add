//! Capture resolution.
//!
//! A token resting on a shared track cell captures every opposing token
//! already on that cell, unless the cell is safe. Home lanes are private,
//! so a move resting there never captures; tokens of the same seat coexist
//! freely (no blocking, no self-capture).

use smallvec::SmallVec;

use crate::core::{Position, Token, TokenId};
use crate::rules::board::is_safe_cell;

/// Token ids captured when `mover` comes to rest on `resting`.
///
/// Pure scan over the token collection; the turn controller commits the
/// result by sending each captured token back to its yard. At most 3
/// opposing tokens can share a cell in a 4-seat game, hence the inline
/// capacity.
#[must_use]
pub fn captured_tokens(
    tokens: &[Token],
    mover: TokenId,
    resting: Position,
) -> SmallVec<[TokenId; 3]> {
    let mut captured = SmallVec::new();

    let Some(cell) = resting.track_index() else {
        return captured;
    };
    if is_safe_cell(cell) {
        return captured;
    }

    let mover_owner = tokens[mover.index()].owner;
    for token in tokens {
        if token.id != mover
            && token.owner != mover_owner
            && token.position == Position::Track(cell)
        {
            captured.push(token.id);
        }
    }

    captured
}
