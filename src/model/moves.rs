//! Moves: the transitions a roll makes available.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::player::Player;
use crate::model::shape::BoardShape;
use crate::model::tile::Tile;

/// A concrete stop along a player's path: the tile together with its path
/// index. The index disambiguates tiles that a path visits more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathTile {
    /// The board tile.
    pub tile: Tile,
    /// Its index along the moving player's path.
    pub index: usize,
}

/// A single legal move.
///
/// A move without a source introduces a waiting piece to the board; a move
/// without a destination bears a piece off the exit. A capturing move sends
/// the opponent's piece at the destination back to its waiting pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    source: Option<PathTile>,
    dest: Option<PathTile>,
    captures: bool,
}

/// The legal moves generated for one roll.
///
/// Inline storage: the branching factor is bounded by the piece count plus
/// the waiting pool, which fits without allocation for the attested rule
/// sets.
pub type MoveList = SmallVec<[Move; 8]>;

impl Move {
    /// Create a move.
    ///
    /// Scoring moves cannot capture; passing `captures` without a
    /// destination is a programming error.
    #[must_use]
    pub fn new(
        player: Player,
        source: Option<PathTile>,
        dest: Option<PathTile>,
        captures: bool,
    ) -> Self {
        assert!(
            dest.is_some() || !captures,
            "a move without a destination cannot capture"
        );
        Self {
            player,
            source,
            dest,
            captures,
        }
    }

    /// The player making this move.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The stop the moving piece starts from, or `None` when a waiting
    /// piece is being introduced.
    #[must_use]
    pub fn source(&self) -> Option<PathTile> {
        self.source
    }

    /// The stop the piece lands on, or `None` when the piece scores.
    #[must_use]
    pub fn dest(&self) -> Option<PathTile> {
        self.dest
    }

    /// Whether this move introduces a waiting piece to the board.
    #[must_use]
    pub fn is_introduction(&self) -> bool {
        self.source.is_none()
    }

    /// Whether this move bears a piece off the end of the path.
    #[must_use]
    pub fn is_score(&self) -> bool {
        self.dest.is_none()
    }

    /// Whether this move captures an opponent piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captures
    }

    /// Whether this move lands a piece on a rosette of the given shape.
    #[must_use]
    pub fn lands_on_rosette(&self, shape: &BoardShape) -> bool {
        self.dest
            .map_or(false, |dest| shape.is_rosette(dest.tile))
    }

    /// An English description of this move.
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.source, self.dest) {
            (None, None) => "Introduce and score a piece.".to_string(),
            (Some(source), None) => format!("Score a piece from {}.", source.tile),
            (None, Some(dest)) if self.captures => {
                format!("Introduce a piece to capture {}.", dest.tile)
            }
            (None, Some(dest)) => format!("Introduce a piece to {}.", dest.tile),
            (Some(source), Some(dest)) if self.captures => {
                format!("Move {} to capture {}.", source.tile, dest.tile)
            }
            (Some(source), Some(dest)) => format!("Move {} to {}.", source.tile, dest.tile),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
