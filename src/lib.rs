//! # ur-engine
//!
//! A rules engine for the Royal Game of Ur and its relatives: race games
//! where two players drive a pool of pieces along fixed paths, capture each
//! other on shared tiles, and bear pieces off the far end.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: Every variant, historical or custom, is a plain
//!    [`RuleSet`] value composed from a board shape, a path pair, a dice
//!    model, and a few policies. The engine has no per-variant code.
//!
//! 2. **Immutable Snapshots**: Turn transitions map one [`GameState`] to the
//!    next and never mutate their input. Persistent data structures keep the
//!    per-step clone cheap, so full histories are kept by default.
//!
//! 3. **Injected Randomness**: Dice draw from a seeded [`GameRng`], making
//!    every game a pure function of its seed and move choices.
//!
//! ## Modules
//!
//! - `model`: Tiles, board shapes, paths, dice, players, boards, moves
//! - `rules`: Rule sets, move generation, and the turn state machine
//! - `game`: A facade tying rules, randomness, and history together
//! - `rng`: Deterministic, forkable, serializable randomness
//! - `error`: Configuration and protocol errors
//!
//! ## Example
//!
//! ```
//! use ur_engine::{Game, RuleSet};
//!
//! let mut game = Game::with_seed(RuleSet::finkel(), 42);
//!
//! let roll = game.roll()?;
//! println!("Light rolled {roll}");
//!
//! if let Some(chosen) = game.available_moves().first().cloned() {
//!     game.play(&chosen)?;
//!     println!("{chosen}");
//! }
//! # Ok::<(), ur_engine::GameError>(())
//! ```

pub mod error;
pub mod game;
pub mod model;
pub mod rng;
pub mod rules;

// Re-export commonly used types
pub use crate::error::{GameError, RulesError};
pub use crate::game::Game;
pub use crate::model::{
    Board, BoardShape, BoardType, Dice, DiceType, ExitRule, Move, MoveList, PathPair, PathTile,
    PathType, Piece, Player, PlayerState, Roll, Tile,
};
pub use crate::rng::{GameRng, GameRngState};
pub use crate::rules::{GameState, Phase, RuleSet};
