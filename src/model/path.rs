//! Player paths around the board.
//!
//! Each player traverses a fixed, ordered sequence of tiles. The sequence is
//! stored with its off-board ends: one entry tile before the first board
//! tile, and one exit tile after the last. Where the two players' sequences
//! overlap, tiles are contested and captures can occur; elsewhere they are
//! private to one player.
//!
//! The historically proposed path layouts are provided as presets. Custom
//! pairs are constructed from waypoints via [`Tile::create_path`].

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::model::player::Player;
use crate::model::tile::Tile;

/// Policy for rolls that would carry a piece past the exit.
///
/// Every attested rule set requires an exact landing on the exit; clipping
/// is offered for custom rule sets. This is path data, not engine logic, so
/// exotic variants need no engine changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitRule {
    /// A roll that overshoots the exit is illegal for that piece.
    #[default]
    RequireExact,
    /// A roll that overshoots the exit scores the piece anyway.
    ClipToExit,
}

/// The pair of paths the light and dark players move their pieces along.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPair {
    name: String,
    light_with_ends: Vec<Tile>,
    dark_with_ends: Vec<Tile>,
    exit_rule: ExitRule,
}

impl PathPair {
    /// Create a path pair from full tile sequences, including the off-board
    /// entry and exit tiles of each player.
    pub fn new(
        name: impl Into<String>,
        light_with_ends: Vec<Tile>,
        dark_with_ends: Vec<Tile>,
    ) -> Result<Self, RulesError> {
        if light_with_ends.len() < 3 || dark_with_ends.len() < 3 {
            return Err(RulesError::PathTooShort);
        }
        Ok(Self::from_parts(name, light_with_ends, dark_with_ends))
    }

    fn from_parts(
        name: impl Into<String>,
        light_with_ends: Vec<Tile>,
        dark_with_ends: Vec<Tile>,
    ) -> Self {
        Self {
            name: name.into(),
            light_with_ends,
            dark_with_ends,
            exit_rule: ExitRule::default(),
        }
    }

    fn preset(name: &str, light_waypoints: &[(u8, u8)], dark_waypoints: &[(u8, u8)]) -> Self {
        let expand = |waypoints: &[(u8, u8)]| {
            let tiles: Vec<Tile> = waypoints.iter().map(|&(x, y)| Tile::at(x, y)).collect();
            Tile::walk(&tiles)
        };
        Self::from_parts(name, expand(light_waypoints), expand(dark_waypoints))
    }

    /// The paths proposed by Bell, the most common layout for the Royal
    /// Game of Ur.
    ///
    /// Citation: R.C. Bell, Board and Table Games From Many Civilizations,
    /// revised ed., Vol. 1 and 2, Dover Publications, Inc., New York, 1979.
    #[must_use]
    pub fn bell() -> Self {
        Self::preset(
            "Bell",
            &[(1, 5), (1, 1), (2, 1), (2, 8), (1, 8), (1, 6)],
            &[(3, 5), (3, 1), (2, 1), (2, 8), (3, 8), (3, 6)],
        )
    }

    /// The paths proposed by Masters for the Royal Game of Ur.
    ///
    /// Citation: J. Masters, The Royal Game of Ur & The Game of 20 Squares
    /// (2021). Available at
    /// <https://www.tradgames.org.uk/games/Royal-Game-Ur.htm>.
    #[must_use]
    pub fn masters() -> Self {
        Self::preset(
            "Masters",
            &[
                (1, 5),
                (1, 1),
                (2, 1),
                (2, 7),
                (3, 7),
                (3, 8),
                (1, 8),
                (1, 6),
            ],
            &[
                (3, 5),
                (3, 1),
                (2, 1),
                (2, 7),
                (1, 7),
                (1, 8),
                (3, 8),
                (3, 6),
            ],
        )
    }

    /// The paths proposed by Murray for the Royal Game of Ur. Pieces travel
    /// up the middle lane twice, so tiles are revisited along the way.
    ///
    /// Citation: H.J.R. Murray, A History of Board-games Other Than Chess,
    /// Oxford University Press, Oxford, 1952.
    #[must_use]
    pub fn murray() -> Self {
        Self::preset(
            "Murray",
            &[
                (1, 5),
                (1, 1),
                (2, 1),
                (2, 7),
                (3, 7),
                (3, 8),
                (1, 8),
                (1, 7),
                (2, 7),
                (2, 1),
                (3, 1),
                (3, 5),
            ],
            &[
                (3, 5),
                (3, 1),
                (2, 1),
                (2, 7),
                (1, 7),
                (1, 8),
                (3, 8),
                (3, 7),
                (2, 7),
                (2, 1),
                (1, 1),
                (1, 5),
            ],
        )
    }

    /// The paths proposed by Skiriuk for the Royal Game of Ur.
    ///
    /// Citation: D. Skiriuk, The rules of royal game of ur (2021).
    /// Available at <https://skyruk.livejournal.com/231444.html>.
    #[must_use]
    pub fn skiriuk() -> Self {
        Self::preset(
            "Skiriuk",
            &[
                (1, 5),
                (1, 1),
                (2, 1),
                (2, 7),
                (3, 7),
                (3, 8),
                (1, 8),
                (1, 7),
                (2, 7),
                (2, 0),
            ],
            &[
                (3, 5),
                (3, 1),
                (2, 1),
                (2, 7),
                (1, 7),
                (1, 8),
                (3, 8),
                (3, 7),
                (2, 7),
                (2, 0),
            ],
        )
    }

    /// The standard paths used for Aseb, the Egyptian game of twenty
    /// squares.
    ///
    /// Citation: W. Crist, A.E. Dunn-Vaturi, and A. de Voogt, Ancient
    /// Egyptians at Play: Board Games Across Borders, Bloomsbury Egyptology,
    /// Bloomsbury Academic, London, 2016.
    #[must_use]
    pub fn aseb() -> Self {
        Self::preset(
            "Aseb",
            &[(1, 5), (1, 1), (2, 1), (2, 12), (1, 12)],
            &[(3, 5), (3, 1), (2, 1), (2, 12), (3, 12)],
        )
    }

    /// The name of this path pair.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The policy for rolls that would pass the exit.
    #[must_use]
    pub fn exit_rule(&self) -> ExitRule {
        self.exit_rule
    }

    /// A copy of this path pair with a different exit policy.
    #[must_use]
    pub fn with_exit_rule(mut self, exit_rule: ExitRule) -> Self {
        self.exit_rule = exit_rule;
        self
    }

    /// The full path of the given player, including the off-board entry and
    /// exit tiles.
    #[must_use]
    pub fn with_ends(&self, player: Player) -> &[Tile] {
        match player {
            Player::Light => &self.light_with_ends,
            Player::Dark => &self.dark_with_ends,
        }
    }

    /// The on-board path of the given player. Index `i` of this slice is
    /// path index `i` of the player's pieces.
    #[must_use]
    pub fn path(&self, player: Player) -> &[Tile] {
        let with_ends = self.with_ends(player);
        &with_ends[1..with_ends.len() - 1]
    }

    /// The off-board entry tile of the given player.
    #[must_use]
    pub fn start(&self, player: Player) -> Tile {
        self.with_ends(player)[0]
    }

    /// The off-board exit tile of the given player.
    #[must_use]
    pub fn end(&self, player: Player) -> Tile {
        *self
            .with_ends(player)
            .last()
            .expect("paths always contain an exit tile")
    }

    /// Whether this pair covers the same on-board tiles, in the same order,
    /// as the other pair. Ignores names and off-board ends.
    #[must_use]
    pub fn is_equivalent(&self, other: &PathPair) -> bool {
        self.path(Player::Light) == other.path(Player::Light)
            && self.path(Player::Dark) == other.path(Player::Dark)
    }
}

/// The named path layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    /// The path proposed by Bell.
    Bell,
    /// The standard path used for Aseb.
    Aseb,
    /// The path proposed by Masters.
    Masters,
    /// The path proposed by Murray.
    Murray,
    /// The path proposed by Skiriuk.
    Skiriuk,
}

impl PathType {
    /// The name of these paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PathType::Bell => "Bell",
            PathType::Aseb => "Aseb",
            PathType::Masters => "Masters",
            PathType::Murray => "Murray",
            PathType::Skiriuk => "Skiriuk",
        }
    }

    /// Create an instance of the paths.
    #[must_use]
    pub fn create_path_pair(self) -> PathPair {
        match self {
            PathType::Bell => PathPair::bell(),
            PathType::Aseb => PathPair::aseb(),
            PathType::Masters => PathPair::masters(),
            PathType::Murray => PathPair::murray(),
            PathType::Skiriuk => PathPair::skiriuk(),
        }
    }
}
