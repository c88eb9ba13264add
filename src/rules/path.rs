//! Path resolution.
//!
//! Computes the ordered sequence of positions a token visits for one move.
//! The last element is the authoritative resting position the turn
//! controller commits; the full sequence is what hosts replay for staged
//! animation.

use crate::core::{MovePath, Position, Seat, Token};
use crate::rules::board::{relative_index, HOME_ENTRY_RELATIVE, HOME_GOAL_INDEX, TRACK_LEN};

/// The single-step transition for a token owned by `seat`.
///
/// - `Track`: step into the home lane from relative cell 50, otherwise one
///   cell forward around the loop.
/// - `HomePath`: one lane cell forward; the step that reaches the goal
///   index completes the token to `Home`.
/// - `Yard` and `Home` have no single-step successor (`Yard` exit is a
///   special one-step move handled by [`resolve_path`]).
#[must_use]
pub fn next_step(position: Position, seat: Seat) -> Option<Position> {
    match position {
        Position::Yard => None,
        Position::Track(index) => {
            if relative_index(index, seat) == HOME_ENTRY_RELATIVE {
                Some(Position::HomePath(0))
            } else {
                Some(Position::Track((index + 1) % TRACK_LEN))
            }
        }
        Position::HomePath(index) => {
            if index + 1 >= HOME_GOAL_INDEX {
                Some(Position::Home)
            } else {
                Some(Position::HomePath(index + 1))
            }
        }
        Position::Home => None,
    }
}

/// The sequence of positions `token` visits when moved by `roll`.
///
/// From the yard the only move is the single step onto the owner's entry
/// cell, and only on a 6; for an illegal yard move the path is empty (the
/// validator excludes that case, callers must not commit an empty path).
/// From anywhere else, applies [`next_step`] up to `roll` times, truncating
/// when a terminal transition is reached.
#[must_use]
pub fn resolve_path(token: &Token, roll: u8) -> MovePath {
    let mut path = MovePath::new();

    if token.position == Position::Yard {
        if roll == 6 {
            path.push(Position::Track(token.owner.start_offset()));
        }
        return path;
    }

    let mut current = token.position;
    for _ in 0..roll {
        match next_step(current, token.owner) {
            Some(next) => {
                path.push(next);
                current = next;
            }
            None => break,
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenId;

    fn token_at(seat: Seat, position: Position) -> Token {
        Token {
            id: TokenId::of(seat, 0),
            owner: seat,
            position,
        }
    }

    #[test]
    fn test_yard_exit_on_six() {
        for seat in Seat::all(4) {
            let token = token_at(seat, Position::Yard);
            let path = resolve_path(&token, 6);
            assert_eq!(path.as_slice(), &[Position::Track(seat.start_offset())]);
        }
    }

    #[test]
    fn test_yard_without_six_is_empty() {
        let token = token_at(Seat::Green, Position::Yard);
        for roll in 1..=5 {
            assert!(resolve_path(&token, roll).is_empty());
        }
    }

    #[test]
    fn test_track_path_steps_forward() {
        let token = token_at(Seat::Green, Position::Track(3));
        let path = resolve_path(&token, 4);
        assert_eq!(
            path.as_slice(),
            &[
                Position::Track(4),
                Position::Track(5),
                Position::Track(6),
                Position::Track(7),
            ]
        );
    }

    #[test]
    fn test_track_wraps_around_loop() {
        // Yellow at global 50 is relative 37; the loop wraps 51 -> 0.
        let token = token_at(Seat::Yellow, Position::Track(50));
        let path = resolve_path(&token, 3);
        assert_eq!(
            path.as_slice(),
            &[Position::Track(51), Position::Track(0), Position::Track(1)]
        );
    }

    #[test]
    fn test_enters_home_lane_at_relative_fifty() {
        // Green at 48: 49, 50, then the lane.
        let token = token_at(Seat::Green, Position::Track(48));
        let path = resolve_path(&token, 4);
        assert_eq!(
            path.as_slice(),
            &[
                Position::Track(49),
                Position::Track(50),
                Position::HomePath(0),
                Position::HomePath(1),
            ]
        );
    }

    #[test]
    fn test_home_lane_entry_for_offset_seat() {
        // Red's relative 50 is global (39 + 50) % 52 = 37.
        let token = token_at(Seat::Red, Position::Track(37));
        let path = resolve_path(&token, 2);
        assert_eq!(
            path.as_slice(),
            &[Position::HomePath(0), Position::HomePath(1)]
        );
    }

    #[test]
    fn test_goal_step_completes_to_home() {
        let token = token_at(Seat::Blue, Position::HomePath(4));
        let path = resolve_path(&token, 1);
        assert_eq!(path.as_slice(), &[Position::Home]);
    }

    #[test]
    fn test_exact_roll_to_home_from_lane_start() {
        let token = token_at(Seat::Blue, Position::HomePath(0));
        let path = resolve_path(&token, 5);
        assert_eq!(
            path.as_slice(),
            &[
                Position::HomePath(1),
                Position::HomePath(2),
                Position::HomePath(3),
                Position::HomePath(4),
                Position::Home,
            ]
        );
    }

    #[test]
    fn test_path_truncates_at_home() {
        // Home is terminal: further steps are dropped.
        let token = token_at(Seat::Green, Position::HomePath(4));
        let path = resolve_path(&token, 6);
        assert_eq!(path.as_slice(), &[Position::Home]);
    }

    #[test]
    fn test_home_has_no_successor() {
        assert_eq!(next_step(Position::Home, Seat::Green), None);
        assert!(resolve_path(&token_at(Seat::Green, Position::Home), 3).is_empty());
    }

    #[test]
    fn test_round_trip_matches_single_steps() {
        // Replaying the path step by step lands on the same resting position.
        for seat in Seat::all(4) {
            for index in 0..52u8 {
                for roll in 1..=6u8 {
                    let token = token_at(seat, Position::Track(index));
                    let path = resolve_path(&token, roll);

                    let mut replayed = token.position;
                    for _ in 0..path.len() {
                        replayed = next_step(replayed, seat).unwrap();
                    }
                    assert_eq!(Some(&replayed), path.last());
                }
            }
        }
    }
}
