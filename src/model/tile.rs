//! Board coordinates.
//!
//! Tiles are 1-based coordinates: `x` selects the column (rendered as a
//! letter, `A` = 1) and `y` the row. A tile is only meaningful on a board
//! once a [`BoardShape`](crate::model::BoardShape) says it exists; tiles
//! outside every shape are used as the off-board entry and exit stops of
//! paths (including `y = 0`, which some paths use for their exit).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// A position on or off the board.
///
/// Compares by coordinates. Renders in letter-number notation:
///
/// ```
/// use ur_engine::Tile;
///
/// let tile = Tile::new(2, 4).unwrap();
/// assert_eq!(tile.to_string(), "B4");
/// assert_eq!("B4".parse::<Tile>().unwrap(), tile);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    x: u8,
    y: u8,
}

impl Tile {
    /// Create a tile at the 1-based coordinates `(x, y)`.
    ///
    /// `x` must fall within `[1, 26]` so that it has a letter form. `y = 0`
    /// is allowed, but only ever occurs off the board.
    pub fn new(x: u8, y: u8) -> Result<Self, RulesError> {
        if x < 1 || x > 26 {
            return Err(RulesError::TileOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    /// Internal constructor for coordinates already known to be in range.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The 1-based x-coordinate (column) of this tile.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// The 1-based y-coordinate (row) of this tile.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Take a unit-length step towards the other tile.
    ///
    /// Steps along the axis with the greater remaining distance, which is
    /// how waypoint lists expand into contiguous paths.
    #[must_use]
    pub fn step_towards(self, other: Tile) -> Tile {
        let dx = i32::from(other.x) - i32::from(self.x);
        let dy = i32::from(other.y) - i32::from(self.y);

        if dx.abs() + dy.abs() <= 1 {
            return other;
        }

        if dx.abs() < dy.abs() {
            Tile {
                x: self.x,
                y: (i32::from(self.y) + dy.signum()) as u8,
            }
        } else {
            Tile {
                x: (i32::from(self.x) + dx.signum()) as u8,
                y: self.y,
            }
        }
    }

    /// Expand waypoint coordinates into the full ordered tile sequence.
    ///
    /// Consecutive waypoints are connected by unit steps, so a handful of
    /// corners describes an entire path.
    pub fn create_path(waypoints: &[(u8, u8)]) -> Result<Vec<Tile>, RulesError> {
        if waypoints.is_empty() {
            return Err(RulesError::NoWaypoints);
        }
        let tiles = waypoints
            .iter()
            .map(|&(x, y)| Tile::new(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::walk(&tiles))
    }

    /// Expand validated waypoints into a contiguous tile sequence.
    pub(crate) fn walk(waypoints: &[Tile]) -> Vec<Tile> {
        let mut path = vec![waypoints[0]];
        for window in waypoints.windows(2) {
            let (mut current, next) = (window[0], window[1]);
            while current != next {
                current = current.step_towards(next);
                path.push(current);
            }
        }
        path
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'A' + self.x - 1) as char;
        write!(f, "{}{}", column, self.y)
    }
}

impl FromStr for Tile {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RulesError::InvalidTileNotation(s.to_string());

        let mut chars = s.chars();
        let column = chars.next().ok_or_else(invalid)?;
        if !column.is_ascii_uppercase() {
            return Err(invalid());
        }

        let x = column as u8 - b'A' + 1;
        let y = chars.as_str().parse::<u8>().map_err(|_| invalid())?;
        Tile::new(x, y)
    }
}
