//! Command rejection conditions.

use crate::core::TokenId;

/// Why a command was rejected.
///
/// Every rejection is a no-op: the game state is untouched and the engine
/// stays in its current phase. There are no recoverable internal errors
/// beyond these; rule arithmetic is total over well-formed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidTransition {
    /// The game has a winner; no further commands are accepted.
    GameFinished,
    /// `roll` was called outside the `Idle` phase.
    NotIdle,
    /// `choose_move` was called outside the `AwaitingMove` phase.
    NotAwaitingMove,
    /// `choose_move` named a token id that does not exist in this game.
    UnknownToken(TokenId),
    /// `choose_move` named a token that is not in the published legal set.
    IneligibleToken(TokenId),
}

impl std::fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTransition::GameFinished => write!(f, "game is finished"),
            InvalidTransition::NotIdle => write!(f, "roll is only allowed while idle"),
            InvalidTransition::NotAwaitingMove => {
                write!(f, "no move choice is being awaited")
            }
            InvalidTransition::UnknownToken(id) => write!(f, "unknown token {id}"),
            InvalidTransition::IneligibleToken(id) => {
                write!(f, "{id} has no legal move for this roll")
            }
        }
    }
}

impl std::error::Error for InvalidTransition {}
