//! A facade tying a rule set, a randomness source, and a state history
//! into one playable game.
//!
//! The facade owns the only mutation in the crate: it appends snapshots to
//! its history. The rules themselves stay pure, so a [`Game`] can always be
//! reconstructed by replaying its seed and move choices.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::model::{Board, Move, MoveList, Player, PlayerState, Roll};
use crate::rng::{GameRng, GameRngState};
use crate::rules::{GameState, Phase, RuleSet};

/// One game in progress, from the opening roll to a finished position.
///
/// ```
/// use ur_engine::{Game, RuleSet};
///
/// let mut game = Game::with_seed(RuleSet::finkel(), 42);
/// let roll = game.roll()?;
/// if let Some(chosen) = game.available_moves().first().cloned() {
///     game.play(&chosen)?;
/// }
/// assert_eq!(game.history().len(), if roll.value() == 0 { 2 } else { 3 });
/// # Ok::<(), ur_engine::GameError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameSnapshot", into = "GameSnapshot")]
pub struct Game {
    rules: RuleSet,
    rng: GameRng,
    states: Vec<GameState>,
}

/// The serialized form of a game: the RNG is captured as its O(1) state.
#[derive(Clone, Serialize, Deserialize)]
struct GameSnapshot {
    rules: RuleSet,
    rng: GameRngState,
    states: Vec<GameState>,
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        Self {
            rules: game.rules,
            rng: game.rng.state(),
            states: game.states,
        }
    }
}

impl From<GameSnapshot> for Game {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            rules: snapshot.rules,
            rng: GameRng::from_state(&snapshot.rng),
            states: snapshot.states,
        }
    }
}

impl Game {
    /// Start a game under the given rules with operating-system entropy.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        let rng = GameRng::from_entropy();
        Self::with_rng(rules, rng)
    }

    /// Start a reproducible game: the same seed and the same move choices
    /// always produce the same history.
    #[must_use]
    pub fn with_seed(rules: RuleSet, seed: u64) -> Self {
        Self::with_rng(rules, GameRng::new(seed))
    }

    /// Start a game drawing dice throws from the given source.
    #[must_use]
    pub fn with_rng(rules: RuleSet, rng: GameRng) -> Self {
        let initial = rules.initial_state();
        Self {
            rules,
            rng,
            states: vec![initial],
        }
    }

    /// The rules this game is played under.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.states.last().expect("a game always has a state")
    }

    /// Every position reached so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GameState] {
        &self.states
    }

    /// Throw the dice for the turn player.
    ///
    /// Fails without consuming randomness when the game is not awaiting a
    /// roll, so a rejected call leaves the dice sequence intact. A throw
    /// with no legal answer passes the turn in the same step.
    pub fn roll(&mut self) -> Result<Roll, GameError> {
        match self.state().phase() {
            Phase::AwaitingRoll => {}
            Phase::Finished => return Err(GameError::GameFinished),
            phase => {
                return Err(GameError::NotAwaitingRoll {
                    phase: phase.name(),
                })
            }
        }
        let roll = self.rules.dice().roll(&mut self.rng);
        let next = self.rules.apply_roll(self.state(), roll)?;
        self.states.push(next);
        Ok(roll)
    }

    /// Apply an externally supplied roll instead of throwing the dice.
    ///
    /// Replays and what-if analysis drive the game from a transcript of
    /// (roll, move) pairs; this entry point records the given roll without
    /// drawing randomness. The roll must be producible by the rule set's
    /// dice.
    pub fn roll_value(&mut self, roll: Roll) -> Result<(), GameError> {
        let next = self.rules.apply_roll(self.state(), roll)?;
        self.states.push(next);
        Ok(())
    }

    /// The legal answers to the pending roll. Empty unless the game is
    /// awaiting a move.
    #[must_use]
    pub fn available_moves(&self) -> MoveList {
        match self.state().roll() {
            Some(roll) => self.rules.find_available_moves(self.state(), roll),
            None => MoveList::new(),
        }
    }

    /// Play one of the available moves.
    pub fn play(&mut self, mv: &Move) -> Result<(), GameError> {
        let next = self.rules.apply_move(self.state(), mv)?;
        self.states.push(next);
        Ok(())
    }

    /// The player whose turn it is. In a finished game, the winner.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.state().turn()
    }

    /// The current board occupancy.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state().board()
    }

    /// The piece pools of the given player.
    #[must_use]
    pub fn player_state(&self, player: Player) -> PlayerState {
        self.state().player_state(player)
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// The winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state().winner()
    }

    /// An English description of the current position.
    #[must_use]
    pub fn describe(&self) -> String {
        self.state().describe()
    }
}
