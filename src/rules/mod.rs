//! Pure rule computations: validation, path resolution, captures.
//!
//! Everything here takes state by reference and returns a value; no module
//! in `rules` mutates the game. The turn controller in `engine` is the only
//! writer.

pub mod board;
pub mod capture;
pub mod path;
pub mod validator;

pub use board::{is_safe_cell, relative_index, HOME_GOAL_INDEX, SAFE_CELLS, TRACK_LEN};
pub use capture::captured_tokens;
pub use path::{next_step, resolve_path};
pub use validator::{can_move, movable_tokens};

// Path previews are part of the published state, so the alias lives with
// the data model; re-exported here beside its producer.
pub use crate::core::MovePath;
