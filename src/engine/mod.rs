//! The turn controller and its command error type.

pub mod controller;
pub mod error;

pub use controller::{LudoEngine, TurnPhase};
pub use error::InvalidTransition;
