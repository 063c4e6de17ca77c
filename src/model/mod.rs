//! The building blocks rule sets are assembled from.
//!
//! Everything here is immutable value data: tiles, board shapes, paths,
//! dice, players, board occupancy, and moves. Rule variation comes from
//! composing these values, never from subtyping.

pub mod board;
pub mod dice;
pub mod moves;
pub mod path;
pub mod player;
pub mod shape;
pub mod tile;

pub use board::{Board, Piece};
pub use dice::{Dice, DiceType, Roll};
pub use moves::{Move, MoveList, PathTile};
pub use path::{ExitRule, PathPair, PathType};
pub use player::{Player, PlayerState};
pub use shape::{BoardShape, BoardType};
pub use tile::Tile;
