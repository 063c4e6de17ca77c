//! Board shapes: which tiles exist, and which are rosettes.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::model::path::PathPair;
use crate::model::player::Player;
use crate::model::tile::Tile;

/// The shape of a board: the set of tiles that exist, and the subset that
/// are rosettes.
///
/// Immutable once constructed. Construction validates that rosettes are a
/// subset of the tiles, and that the shape is translated to touch both axes
/// (tiles at x = 1 and at y = 1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardShape {
    name: String,
    tiles: FxHashSet<Tile>,
    rosettes: FxHashSet<Tile>,
    width: u8,
    height: u8,
}

impl BoardShape {
    /// Create a board shape from its tile and rosette sets.
    pub fn new(
        name: impl Into<String>,
        tiles: FxHashSet<Tile>,
        rosettes: FxHashSet<Tile>,
    ) -> Result<Self, RulesError> {
        if tiles.is_empty() {
            return Err(RulesError::EmptyBoard);
        }
        for &rosette in &rosettes {
            if !tiles.contains(&rosette) {
                return Err(RulesError::RosetteOffBoard(rosette));
            }
        }

        let min_x = tiles.iter().map(|tile| tile.x()).min().unwrap_or(0);
        let min_y = tiles.iter().map(|tile| tile.y()).min().unwrap_or(0);
        if min_x != 1 || min_y != 1 {
            return Err(RulesError::UntranslatedBoard { min_x, min_y });
        }

        Ok(Self::from_parts(name, tiles, rosettes))
    }

    fn from_parts(
        name: impl Into<String>,
        tiles: FxHashSet<Tile>,
        rosettes: FxHashSet<Tile>,
    ) -> Self {
        let width = tiles.iter().map(|tile| tile.x()).max().unwrap_or(0);
        let height = tiles.iter().map(|tile| tile.y()).max().unwrap_or(0);
        Self {
            name: name.into(),
            tiles,
            rosettes,
            width,
            height,
        }
    }

    /// The standard board of the Royal Game of Ur, following the boards
    /// excavated by Sir Leonard Woolley: twenty tiles in three columns, with
    /// rosettes on the corner squares and the centre of the middle lane.
    ///
    /// The tile set is derived from the Bell paths, the same way any shape
    /// can be derived from the paths played over it.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_paths("Standard", &PathPair::bell(), [(1, 1), (3, 1), (2, 4), (1, 7), (3, 7)])
    }

    /// The board used for the game Aseb: three rows of 4, 12, and 4 tiles.
    #[must_use]
    pub fn aseb() -> Self {
        Self::from_paths(
            "Aseb",
            &PathPair::aseb(),
            [(1, 1), (3, 1), (2, 4), (2, 8), (2, 12)],
        )
    }

    fn from_paths<const N: usize>(name: &str, paths: &PathPair, rosettes: [(u8, u8); N]) -> Self {
        let tiles = paths
            .path(Player::Light)
            .iter()
            .chain(paths.path(Player::Dark))
            .copied()
            .collect();
        let rosettes = rosettes.iter().map(|&(x, y)| Tile::at(x, y)).collect();
        Self::from_parts(name, tiles, rosettes)
    }

    /// The name of this board shape.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set of tiles that fall within this board shape.
    #[must_use]
    pub fn tiles(&self) -> &FxHashSet<Tile> {
        &self.tiles
    }

    /// The set of rosette tiles of this board shape.
    #[must_use]
    pub fn rosettes(&self) -> &FxHashSet<Tile> {
        &self.rosettes
    }

    /// The number of x-coordinates that exist in this board shape.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The number of y-coordinates that exist in this board shape.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The number of tiles contained in this board shape.
    #[must_use]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the given tile falls within this board shape.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Whether all the given tiles fall within this board shape.
    pub fn contains_all<'a>(&self, tiles: impl IntoIterator<Item = &'a Tile>) -> bool {
        tiles.into_iter().all(|&tile| self.contains(tile))
    }

    /// Whether the given tile is a rosette of this board shape.
    #[must_use]
    pub fn is_rosette(&self, tile: Tile) -> bool {
        self.rosettes.contains(&tile)
    }

    /// Whether this shape covers the same tiles and rosettes as the other,
    /// ignoring names.
    #[must_use]
    pub fn is_equivalent(&self, other: &BoardShape) -> bool {
        self.tiles == other.tiles && self.rosettes == other.rosettes
    }
}

/// The named board shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardType {
    /// The standard board of the Royal Game of Ur.
    Standard,
    /// The Aseb board.
    Aseb,
}

impl BoardType {
    /// The name of this board shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardType::Standard => "Standard",
            BoardType::Aseb => "Aseb",
        }
    }

    /// Create an instance of the board shape.
    #[must_use]
    pub fn create_board_shape(self) -> BoardShape {
        match self {
            BoardType::Standard => BoardShape::standard(),
            BoardType::Aseb => BoardShape::aseb(),
        }
    }
}
