//! Error types split along the two failure classes of the engine.
//!
//! - [`RulesError`]: configuration errors, raised while constructing tiles,
//!   shapes, paths, dice, or rule sets. Once a rule set has been validated,
//!   none of these can surface during play.
//! - [`GameError`]: protocol errors, raised when a caller rolls or moves out
//!   of phase, submits a move outside the legal set, or touches a finished
//!   game. These are caller contract violations, not game outcomes, and are
//!   never silently absorbed.

use thiserror::Error;

use crate::model::{Move, Player, Tile};

/// An error in the construction of a rule set or one of its components.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Tile coordinates outside the representable board area.
    #[error("tile coordinates ({x}, {y}) are out of range: x must fall within [1, 26]")]
    TileOutOfRange { x: u8, y: u8 },

    /// Text that does not decode to a tile.
    #[error("cannot decode a tile from {0:?}: expected a letter followed by a number, e.g. \"A4\"")]
    InvalidTileNotation(String),

    /// A board shape with no tiles.
    #[error("a board shape requires at least one tile")]
    EmptyBoard,

    /// A rosette that is not a tile of its board shape.
    #[error("rosette at {0} does not exist on the board")]
    RosetteOffBoard(Tile),

    /// A board shape that is not anchored at x = 1, y = 1.
    #[error(
        "the board shape must be translated to have tiles at an x-coordinate of 1 \
         and a y-coordinate of 1 (minimum x = {min_x}, minimum y = {min_y})"
    )]
    UntranslatedBoard { min_x: u8, min_y: u8 },

    /// A path without waypoints.
    #[error("no waypoints were provided to construct a path")]
    NoWaypoints,

    /// A path too short to hold an entry tile, a board tile, and an exit tile.
    #[error("a path requires an off-board entry tile, at least one board tile, and an off-board exit tile")]
    PathTooShort,

    /// A path that steps outside the board shape it is paired with.
    #[error("the {player} player's path visits {tile}, which does not exist on the board")]
    PathTileOffBoard { player: Player, tile: Tile },

    /// A rule set where players start with no pieces.
    #[error("the starting piece count must be at least 1")]
    NoStartingPieces,

    /// Dice with nothing to roll.
    #[error("dice must roll at least one die")]
    NoDice,

    /// Dice whose remapped maximum value cannot be represented.
    #[error("cannot roll {count} dice with a zero remap: the remapped maximum would not fit in a byte")]
    TooManyDice { count: u8 },
}

/// A violation of the roll/move protocol by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game has been won; no further transitions are accepted.
    #[error("the game is finished; no further rolls or moves are accepted")]
    GameFinished,

    /// `roll` was called while the game was not awaiting a roll.
    #[error("expected the game to be awaiting a roll, but it is {phase}")]
    NotAwaitingRoll { phase: &'static str },

    /// `make_move` was called while the game was not awaiting a move.
    #[error("expected the game to be awaiting a move, but it is {phase}")]
    NotAwaitingMove { phase: &'static str },

    /// The submitted move is not a member of the legal move set.
    #[error("illegal move: \"{0}\" is not one of the available moves")]
    IllegalMove(Move),

    /// A roll value the active dice can never produce.
    #[error("a roll of {value} cannot be produced by these dice (maximum {max})")]
    RollOutOfRange { value: u8, max: u8 },
}
