//! Turn transitions.
//!
//! The turn cycle is a small state machine over [`GameState`] snapshots:
//! `apply_roll` consumes an `AwaitingRoll` state and `apply_move` an
//! `AwaitingMove` state, each returning the next snapshot. A roll with no
//! legal answer passes the turn in one step; a finished game absorbs.

use crate::error::GameError;
use crate::model::{Board, Move, Piece, Player, PlayerState, Roll};
use crate::rules::ruleset::RuleSet;
use crate::rules::state::{GameState, Phase};

impl RuleSet {
    /// The starting position under these rules: an empty board, full
    /// waiting pools, and the light player to roll.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(
            Board::new(self.board_shape()),
            PlayerState::new(Player::Light, self.starting_piece_count(), 0),
            PlayerState::new(Player::Dark, self.starting_piece_count(), 0),
            Player::Light,
            Phase::AwaitingRoll,
            None,
        )
    }

    /// Apply a roll of the dice to a state awaiting one.
    ///
    /// A roll that permits at least one move yields an `AwaitingMove` state
    /// carrying the roll. A roll with no legal answer, including a roll of
    /// zero, passes the turn to the other player immediately.
    pub fn apply_roll(&self, state: &GameState, roll: Roll) -> Result<GameState, GameError> {
        match state.phase() {
            Phase::AwaitingRoll => {}
            Phase::Finished => return Err(GameError::GameFinished),
            phase => {
                return Err(GameError::NotAwaitingRoll {
                    phase: phase.name(),
                })
            }
        }
        if !self.dice().is_valid_roll(roll.value()) {
            return Err(GameError::RollOutOfRange {
                value: roll.value(),
                max: self.dice().max_value(),
            });
        }

        let who = state.turn();
        let moves = self.find_available_moves(state, roll);
        let (turn, phase, roll) = if moves.is_empty() {
            (who.other(), Phase::AwaitingRoll, None)
        } else {
            (who, Phase::AwaitingMove, Some(roll))
        };
        Ok(GameState::new(
            state.board().clone(),
            state.player_state(Player::Light),
            state.player_state(Player::Dark),
            turn,
            phase,
            roll,
        ))
    }

    /// Apply a chosen move to a state awaiting one.
    ///
    /// The move must be one of the moves generated for the pending roll;
    /// moves are compared structurally, so a move built by hand is accepted
    /// when it matches a generated one. Scoring the last piece finishes the
    /// game; otherwise the extra-roll policies decide whose roll is next.
    pub fn apply_move(&self, state: &GameState, mv: &Move) -> Result<GameState, GameError> {
        match state.phase() {
            Phase::AwaitingMove => {}
            Phase::Finished => return Err(GameError::GameFinished),
            phase => {
                return Err(GameError::NotAwaitingMove {
                    phase: phase.name(),
                })
            }
        }
        let roll = state.roll().expect("AwaitingMove states carry a roll");
        if !self.find_available_moves(state, roll).contains(mv) {
            return Err(GameError::IllegalMove(mv.clone()));
        }

        let who = state.turn();
        let mut board = state.board().clone();
        let mut mover = state.player_state(who);
        let mut opponent = state.player_state(who.other());

        match mv.source() {
            None => mover = mover.with_piece_introduced(),
            Some(source) => board.clear(source.tile),
        }
        match mv.dest() {
            None => mover = mover.with_piece_scored(),
            Some(dest) => {
                if mv.is_capture() {
                    opponent = opponent.with_piece_captured();
                }
                board.set(
                    dest.tile,
                    Piece {
                        owner: who,
                        path_index: dest.index,
                    },
                );
            }
        }

        let (light, dark) = match who {
            Player::Light => (mover, opponent),
            Player::Dark => (opponent, mover),
        };

        if mover.scored() == self.starting_piece_count() {
            return Ok(GameState::new(
                board,
                light,
                dark,
                who,
                Phase::Finished,
                None,
            ));
        }

        let turn = if self.grants_extra_roll(mv) {
            who
        } else {
            who.other()
        };
        Ok(GameState::new(
            board,
            light,
            dark,
            turn,
            Phase::AwaitingRoll,
            None,
        ))
    }

    /// Whether the given move earns its player another roll.
    fn grants_extra_roll(&self, mv: &Move) -> bool {
        (self.rosettes_grant_extra_rolls() && mv.lands_on_rosette(self.board_shape()))
            || (self.captures_grant_extra_rolls() && mv.is_capture())
    }
}
