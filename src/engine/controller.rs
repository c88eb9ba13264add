//! The turn controller.
//!
//! Drives one round: roll, resolve candidates, wait for a move choice (or
//! skip the turn), commit the move, resolve captures, check victory,
//! advance or repeat. All commands are synchronous and atomic: final state
//! is committed the instant a command returns, and a host that wants staged
//! playback replays the returned path at its own pace.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{DiceRng, DieSource, GameState, MovePath, Position, TokenId};
use crate::engine::error::InvalidTransition;
use crate::rules::{captured_tokens, movable_tokens, resolve_path};

/// Phase of the per-turn state machine.
///
/// `Rolling` and `Resolving` are transient: commands pass through them and
/// settle before returning, so snapshots only ever observe `Idle`,
/// `AwaitingMove`, or `Finished`. `Finished` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Ready for the current seat to roll.
    Idle,
    /// A die roll is being processed.
    Rolling,
    /// One or more legal tokens were published; waiting for `choose_move`.
    AwaitingMove,
    /// A move was committed; captures and victory are being applied.
    Resolving,
    /// A winner is set; no further transitions are accepted.
    Finished,
}

/// The rule engine: exclusive owner of the game state.
///
/// Hosts drive it through three commands (`start`, `roll`, `choose_move`)
/// and read it through `snapshot`. Presentation concerns stay outside:
/// the engine never waits, animates, or schedules.
///
/// ## Example
///
/// ```
/// use ludo_engine::engine::{LudoEngine, TurnPhase};
///
/// let mut engine = LudoEngine::new(2, 42);
/// let roll = engine.roll().unwrap();
/// assert!((1..=6).contains(&roll));
///
/// if engine.phase() == TurnPhase::AwaitingMove {
///     let id = *engine.snapshot().movable.iter().next().unwrap();
///     let path = engine.choose_move(id).unwrap();
///     assert!(!path.is_empty());
/// }
/// ```
pub struct LudoEngine {
    state: GameState,
    phase: TurnPhase,
    die: Box<dyn DieSource>,
}

impl LudoEngine {
    /// Create an engine with seeded dice and start a fresh game.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self::with_die_source(player_count, DiceRng::new(seed))
    }

    /// Create an engine with a custom die source (scripted replays, tests).
    #[must_use]
    pub fn with_die_source(player_count: usize, die: impl DieSource + 'static) -> Self {
        Self {
            state: GameState::new(player_count),
            phase: TurnPhase::Idle,
            die: Box::new(die),
        }
    }

    /// Reset to a fresh game with `player_count` active seats.
    ///
    /// Discards any prior game, including a finished one; the die source
    /// carries over. Panics if `player_count` is outside 2..=4.
    pub fn start(&mut self, player_count: usize) {
        self.state = GameState::new(player_count);
        self.phase = TurnPhase::Idle;
    }

    /// Read-only view of the current state.
    ///
    /// Idempotent: repeated calls without an intervening command observe
    /// identical data.
    #[must_use]
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Roll the die for the current seat.
    ///
    /// Only legal in `Idle`. If no token of the current seat can move, the
    /// turn is skipped on the spot: the die is cleared, the turn advances,
    /// and `AwaitingMove` is never observed. Otherwise the legal set and
    /// its path previews are published and the engine waits for
    /// [`choose_move`](Self::choose_move).
    ///
    /// Returns the rolled value.
    pub fn roll(&mut self) -> Result<u8, InvalidTransition> {
        match self.phase {
            TurnPhase::Finished => return Err(InvalidTransition::GameFinished),
            TurnPhase::Idle => {}
            _ => return Err(InvalidTransition::NotIdle),
        }

        self.phase = TurnPhase::Rolling;
        self.state.rolling = true;
        self.state.last_captured = None;

        let roll = self.die.roll_die();
        debug_assert!((1..=6).contains(&roll), "die source produced {roll}");
        self.state.die_value = Some(roll);
        self.state.rolling = false;

        let movable = movable_tokens(&self.state, roll);
        if movable.is_empty() {
            // Nothing to choose: the roll is consumed and the turn passes.
            self.state.advance_turn();
            self.phase = TurnPhase::Idle;
        } else {
            let previews: FxHashMap<TokenId, MovePath> = self
                .state
                .tokens()
                .iter()
                .filter(|token| movable.contains(&token.id))
                .map(|token| (token.id, resolve_path(token, roll)))
                .collect();

            self.state.movable = movable;
            self.state.previews = previews;
            self.state.waiting_for_move = true;
            self.phase = TurnPhase::AwaitingMove;
        }

        Ok(roll)
    }

    /// Commit the current roll to the chosen token.
    ///
    /// Only legal in `AwaitingMove`, and only for a token in the published
    /// legal set; an explicit choice is required even when that set has a
    /// single entry. Commits the token to the path's resting position, then
    /// resolves synchronously: captures, win check, bonus turn on a 6 or
    /// turn advancement otherwise.
    ///
    /// Returns the committed path so the host can replay it for staged
    /// animation; the state is already final when this returns.
    pub fn choose_move(&mut self, id: TokenId) -> Result<MovePath, InvalidTransition> {
        match self.phase {
            TurnPhase::Finished => return Err(InvalidTransition::GameFinished),
            TurnPhase::AwaitingMove => {}
            _ => return Err(InvalidTransition::NotAwaitingMove),
        }

        let Some(token) = self.state.token(id) else {
            return Err(InvalidTransition::UnknownToken(id));
        };
        if !self.state.movable.contains(&id) {
            return Err(InvalidTransition::IneligibleToken(id));
        }

        let roll = self
            .state
            .die_value
            .expect("AwaitingMove requires a rolled die");
        let path = resolve_path(token, roll);
        let resting = *path
            .last()
            .expect("a published-legal token has a nonempty path");

        self.phase = TurnPhase::Resolving;
        self.state.clear_move_offer();
        self.state.token_mut(id).position = resting;
        self.resolve(id, resting, roll);

        Ok(path)
    }

    /// Apply captures, consume the die, and settle the next phase.
    fn resolve(&mut self, mover: TokenId, resting: Position, roll: u8) {
        for captured in captured_tokens(self.state.tokens(), mover, resting) {
            self.state.token_mut(captured).position = Position::Yard;
            self.state.last_captured = Some(captured);
        }

        self.state.die_value = None;

        let acting = self.state.current_player();
        if self.state.all_home(acting) {
            self.state.winner = Some(acting);
            self.phase = TurnPhase::Finished;
            return;
        }

        if roll != 6 {
            self.state.advance_turn();
        }
        // A 6 keeps the same seat: the bonus is the right to roll again,
        // never a forced extra roll.
        self.phase = TurnPhase::Idle;
    }
}
