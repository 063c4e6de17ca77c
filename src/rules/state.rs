//! Game state snapshots.
//!
//! A [`GameState`] is one immutable position in a game: the board, both
//! player pools, whose turn it is, the phase, and the roll awaiting a move
//! when there is one. Turn transitions return new snapshots and never touch
//! the input, so a history of states can be kept for replay or analysis at
//! the cost of a structural-sharing clone per step.

use serde::{Deserialize, Serialize};

use crate::model::{Board, Player, PlayerState, Roll};

/// Where a state sits in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The turn player has not rolled yet.
    AwaitingRoll,
    /// The turn player has rolled and must choose a move.
    AwaitingMove,
    /// The game is over and the turn player is the winner.
    Finished,
}

impl Phase {
    /// The display name of this phase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::AwaitingRoll => "AwaitingRoll",
            Phase::AwaitingMove => "AwaitingMove",
            Phase::Finished => "Finished",
        }
    }
}

/// One position in a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    light: PlayerState,
    dark: PlayerState,
    turn: Player,
    phase: Phase,
    roll: Option<Roll>,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// States in the `AwaitingMove` phase carry the roll to be played;
    /// states in other phases carry none.
    #[must_use]
    pub fn new(
        board: Board,
        light: PlayerState,
        dark: PlayerState,
        turn: Player,
        phase: Phase,
        roll: Option<Roll>,
    ) -> Self {
        assert_eq!(
            roll.is_some(),
            phase == Phase::AwaitingMove,
            "a roll accompanies exactly the AwaitingMove phase"
        );
        Self {
            board,
            light,
            dark,
            turn,
            phase,
            roll,
        }
    }

    /// The board occupancy of this position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece pools of the given player.
    #[must_use]
    pub fn player_state(&self, player: Player) -> PlayerState {
        match player {
            Player::Light => self.light,
            Player::Dark => self.dark,
        }
    }

    /// The player whose turn it is. In a finished state, the winner.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Where this state sits in the turn cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The roll awaiting a move, when the phase is `AwaitingMove`.
    #[must_use]
    pub fn roll(&self) -> Option<Roll> {
        self.roll
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The winner of a finished game, or `None` while play continues.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.is_finished() {
            Some(self.turn)
        } else {
            None
        }
    }

    /// An English description of this position.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.phase {
            Phase::AwaitingRoll => format!("{} to roll.", self.turn),
            Phase::AwaitingMove => {
                let roll = self.roll.expect("AwaitingMove states carry a roll");
                format!("{} rolled {} and must move.", self.turn, roll)
            }
            Phase::Finished => format!("{} won.", self.turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoardShape;

    fn start_state(phase: Phase, roll: Option<Roll>) -> GameState {
        GameState::new(
            Board::new(&BoardShape::standard()),
            PlayerState::new(Player::Light, 7, 0),
            PlayerState::new(Player::Dark, 7, 0),
            Player::Light,
            phase,
            roll,
        )
    }

    #[test]
    fn test_accessors() {
        let state = start_state(Phase::AwaitingRoll, None);

        assert_eq!(state.turn(), Player::Light);
        assert_eq!(state.phase(), Phase::AwaitingRoll);
        assert_eq!(state.roll(), None);
        assert_eq!(state.player_state(Player::Dark).waiting(), 7);
        assert!(!state.is_finished());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            start_state(Phase::AwaitingRoll, None).describe(),
            "Light to roll."
        );
        assert_eq!(
            start_state(Phase::AwaitingMove, Some(Roll::new(3))).describe(),
            "Light rolled 3 and must move."
        );
        assert_eq!(
            start_state(Phase::Finished, None).describe(),
            "Light won."
        );
    }

    #[test]
    fn test_finished_state_names_the_winner() {
        let state = start_state(Phase::Finished, None);
        assert!(state.is_finished());
        assert_eq!(state.winner(), Some(Player::Light));
    }

    #[test]
    #[should_panic(expected = "AwaitingMove")]
    fn test_roll_requires_awaiting_move() {
        let _ = start_state(Phase::AwaitingRoll, Some(Roll::new(2)));
    }

    #[test]
    fn test_serde_round_trip() {
        let state = start_state(Phase::AwaitingMove, Some(Roll::new(4)));
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
