//! Board occupancy.
//!
//! The board stores at most one piece per tile over the bounding box of its
//! shape. Storage is a persistent vector, so cloning a board for the next
//! snapshot shares structure with the previous one instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::model::player::Player;
use crate::model::shape::BoardShape;
use crate::model::tile::Tile;

/// A piece on the board.
///
/// Pieces have positional identity only: a piece is fully described by its
/// owner and its index along the owner's path. Two pieces of one player are
/// distinguished by nothing else. The path index matters beyond the tile
/// because some paths visit a tile twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// The player that owns this piece.
    pub owner: Player,
    /// The index of the piece along its owner's path.
    pub path_index: usize,
}

/// The occupancy of a board.
///
/// A value type: mutating methods touch only this value, and clones share
/// storage. The board knows its bounding box but not the shape itself;
/// positions are only ever written through paths that were validated against
/// the shape when the rule set was constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    grid: Vector<Option<Piece>>,
}

impl Board {
    /// Create an empty board covering the given shape.
    #[must_use]
    pub fn new(shape: &BoardShape) -> Self {
        let size = shape.width() as usize * shape.height() as usize;
        Self {
            width: shape.width(),
            height: shape.height(),
            grid: std::iter::repeat(None).take(size).collect(),
        }
    }

    /// The number of columns this board covers.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The number of rows this board covers.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        if tile.x() < 1 || tile.x() > self.width || tile.y() < 1 || tile.y() > self.height {
            return None;
        }
        Some((tile.y() as usize - 1) * self.width as usize + (tile.x() as usize - 1))
    }

    /// The piece at the given tile, if any.
    #[must_use]
    pub fn get(&self, tile: Tile) -> Option<Piece> {
        let index = self.index(tile)?;
        self.grid.get(index).copied().flatten()
    }

    /// Place a piece on the given tile, replacing any occupant.
    pub fn set(&mut self, tile: Tile, piece: Piece) {
        let index = self
            .index(tile)
            .unwrap_or_else(|| panic!("tile {tile} is outside the board"));
        self.grid = self.grid.update(index, Some(piece));
    }

    /// Remove the piece from the given tile, if any.
    pub fn clear(&mut self, tile: Tile) {
        if let Some(index) = self.index(tile) {
            self.grid = self.grid.update(index, None);
        }
    }

    /// Count the pieces of the given player on the board.
    #[must_use]
    pub fn count_pieces(&self, player: Player) -> u8 {
        self.grid
            .iter()
            .filter(|occupant| matches!(occupant, Some(piece) if piece.owner == player))
            .count() as u8
    }

    /// Iterate over the occupied tiles of the board.
    pub fn pieces(&self) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(|(index, occupant)| {
            (*occupant).map(|piece| {
                let x = (index % self.width as usize) as u8 + 1;
                let y = (index / self.width as usize) as u8 + 1;
                (Tile::at(x, y), piece)
            })
        })
    }
}
