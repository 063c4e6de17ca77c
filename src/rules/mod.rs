//! Rule sets and the turn state machine built on them.
//!
//! [`RuleSet`] aggregates the model values a game is played under and
//! carries the engine itself: move generation and the roll and move
//! transitions between [`GameState`] snapshots.

pub mod ruleset;
pub mod state;

mod movegen;
mod turn;

pub use ruleset::RuleSet;
pub use state::{GameState, Phase};
