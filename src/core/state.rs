//! Canonical game state.
//!
//! One `GameState` instance exists per game, exclusively owned by the turn
//! controller. Everything a host needs to render lives here: active seats,
//! whose turn it is, the die, the tokens, the published legal-move set with
//! its path previews, the last capture, and the winner.
//!
//! ## Invariants
//!
//! - Exactly 4 tokens per active seat, created at `new` and never created
//!   or destroyed afterwards; tokens only change position (including being
//!   sent back to the yard by a capture).
//! - `current_turn_index` always indexes a live entry of the seat list.
//! - `die_value` is present only between a roll and the move (or skip) that
//!   consumes it.
//! - Once `winner` is set, no further token or turn mutation occurs; the
//!   turn controller enforces this by refusing all commands.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::player::Seat;
use super::position::MovePath;
use super::token::{Token, TokenId, TOKENS_PER_SEAT};

/// Full state of one game, readable by hosts via `LudoEngine::snapshot`.
///
/// All mutation flows through the turn controller; the fields hosts read
/// raw are public, the collections with structural invariants are behind
/// accessors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Active seats, the first N of the canonical order.
    players: Vec<Seat>,

    /// Tokens, 4 per active seat, indexed by `TokenId`.
    tokens: Vec<Token>,

    /// Index into `players` of the seat to act.
    pub current_turn_index: usize,

    /// The rolled die, present until consumed by a move or a turn skip.
    pub die_value: Option<u8>,

    /// True only while a roll is being processed; always false at command
    /// boundaries, kept for the snapshot contract.
    pub rolling: bool,

    /// True while the engine waits for `choose_move`.
    pub waiting_for_move: bool,

    /// Token ids eligible to move on the current roll.
    pub movable: FxHashSet<TokenId>,

    /// Precomputed path preview per eligible token.
    pub previews: FxHashMap<TokenId, MovePath>,

    /// The most recently captured token, kept until the next roll so hosts
    /// get a feedback window.
    pub last_captured: Option<TokenId>,

    /// The winning seat, set at most once per game.
    pub winner: Option<Seat>,
}

impl GameState {
    /// Create a fresh game with `player_count` active seats and all tokens
    /// in the yard.
    ///
    /// Panics if `player_count` is outside 2..=4; seat counts are a host
    /// contract, not a runtime condition.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(
            (2..=4).contains(&player_count),
            "Player count must be 2-4"
        );

        let players: Vec<Seat> = Seat::all(player_count).collect();
        let tokens = players
            .iter()
            .flat_map(|&seat| {
                (0..TOKENS_PER_SEAT as u8).map(move |slot| Token::new(TokenId::of(seat, slot), seat))
            })
            .collect();

        Self {
            players,
            tokens,
            current_turn_index: 0,
            die_value: None,
            rolling: false,
            waiting_for_move: false,
            movable: FxHashSet::default(),
            previews: FxHashMap::default(),
            last_captured: None,
            winner: None,
        }
    }

    // === Seats ===

    /// Active seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[Seat] {
        &self.players
    }

    /// Number of active seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Seat {
        self.players[self.current_turn_index]
    }

    // === Tokens ===

    /// All tokens, in id order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up a token by id.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Tokens belonging to one seat.
    pub fn tokens_of(&self, seat: Seat) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.owner == seat)
    }

    /// True if all 4 of the seat's tokens have reached home.
    #[must_use]
    pub fn all_home(&self, seat: Seat) -> bool {
        self.tokens_of(seat).all(Token::has_completed)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    // === Turn advancement ===

    /// Hand the turn to the next active seat, clearing the consumed roll
    /// and any published move state.
    pub(crate) fn advance_turn(&mut self) {
        self.current_turn_index = (self.current_turn_index + 1) % self.players.len();
        self.die_value = None;
        self.clear_move_offer();
    }

    /// Drop the published legal set, previews, and the waiting flag.
    pub(crate) fn clear_move_offer(&mut self) {
        self.waiting_for_move = false;
        self.movable.clear();
        self.previews.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(3);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.players(), &[Seat::Green, Seat::Yellow, Seat::Blue]);
        assert_eq!(state.tokens().len(), 12);
        assert_eq!(state.current_player(), Seat::Green);
        assert_eq!(state.die_value, None);
        assert_eq!(state.winner, None);
        assert!(state.tokens().iter().all(|t| t.position == Position::Yard));
    }

    #[test]
    fn test_four_tokens_per_seat() {
        let state = GameState::new(4);

        for seat in Seat::all(4) {
            assert_eq!(state.tokens_of(seat).count(), 4);
        }
    }

    #[test]
    fn test_token_ids_index_token_vec() {
        let state = GameState::new(2);

        for token in state.tokens() {
            assert_eq!(state.token(token.id), Some(token));
        }
        assert_eq!(state.token(TokenId(8)), None); // Blue is not active
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = GameState::new(2);
        state.die_value = Some(3);

        state.advance_turn();
        assert_eq!(state.current_player(), Seat::Yellow);
        assert_eq!(state.die_value, None);

        state.advance_turn();
        assert_eq!(state.current_player(), Seat::Green);
    }

    #[test]
    fn test_all_home() {
        let mut state = GameState::new(2);
        assert!(!state.all_home(Seat::Green));

        for slot in 0..4 {
            state.token_mut(TokenId::of(Seat::Green, slot)).position = Position::Home;
        }
        assert!(state.all_home(Seat::Green));
        assert!(!state.all_home(Seat::Yellow));
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_rejects_single_player() {
        let _ = GameState::new(1);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_rejects_five_players() {
        let _ = GameState::new(5);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut state = GameState::new(2);
        state.token_mut(TokenId(0)).position = Position::Track(17);
        state.die_value = Some(5);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.players(), state.players());
        assert_eq!(back.tokens(), state.tokens());
        assert_eq!(back.die_value, state.die_value);
    }
}
