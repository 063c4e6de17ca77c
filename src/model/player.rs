//! The two players and their piece pools.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The light player, who moves first.
    Light,
    /// The dark player.
    Dark,
}

impl Player {
    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// The display name of this player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Light => "Light",
            Player::Dark => "Dark",
        }
    }

    /// The character representing this player in shorthand notations.
    #[must_use]
    pub const fn character(self) -> char {
        match self {
            Player::Light => 'L',
            Player::Dark => 'D',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The piece pools of one player.
///
/// Pieces are fungible: pieces on the board are identified by their path
/// position, so the player state only carries the count still waiting to
/// enter and the count already borne off. The sum of waiting, on-board, and
/// scored pieces always equals the rule set's starting piece count.
///
/// Transitions produce new values rather than mutating, matching the
/// snapshot semantics of the rest of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    player: Player,
    waiting: u8,
    scored: u8,
}

impl PlayerState {
    /// Create a player state with the given pool counts.
    #[must_use]
    pub const fn new(player: Player, waiting: u8, scored: u8) -> Self {
        Self {
            player,
            waiting,
            scored,
        }
    }

    /// The player these pools belong to.
    #[must_use]
    pub const fn player(self) -> Player {
        self.player
    }

    /// The number of pieces still waiting to enter the board.
    #[must_use]
    pub const fn waiting(self) -> u8 {
        self.waiting
    }

    /// The number of pieces borne off the end of the path.
    #[must_use]
    pub const fn scored(self) -> u8 {
        self.scored
    }

    /// The state after a waiting piece entered the board.
    #[must_use]
    pub fn with_piece_introduced(self) -> Self {
        debug_assert!(self.waiting > 0, "no waiting piece to introduce");
        Self {
            waiting: self.waiting - 1,
            ..self
        }
    }

    /// The state after one of this player's board pieces was captured.
    #[must_use]
    pub fn with_piece_captured(self) -> Self {
        Self {
            waiting: self.waiting + 1,
            ..self
        }
    }

    /// The state after a piece was borne off the end of the path.
    #[must_use]
    pub fn with_piece_scored(self) -> Self {
        Self {
            scored: self.scored + 1,
            ..self
        }
    }
}
