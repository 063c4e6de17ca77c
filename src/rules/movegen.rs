//! Legal move generation.
//!
//! For a given position and roll, the turn player may introduce a waiting
//! piece or advance any of their board pieces by the rolled distance. A
//! destination is playable unless it is occupied by the mover's own piece,
//! or it is an opponent piece standing on a safe rosette. A destination past
//! the end of the path scores the piece, subject to the path's exit rule.

use crate::model::{ExitRule, Move, MoveList, PathTile, Piece, Player, Roll, Tile};
use crate::rules::ruleset::RuleSet;
use crate::rules::state::GameState;

impl RuleSet {
    /// Find every legal move for the turn player of `state` given `roll`.
    ///
    /// A roll of zero never moves a piece, so it yields an empty list. The
    /// list orders the introduction move first, then board moves by
    /// ascending source path index.
    #[must_use]
    pub fn find_available_moves(&self, state: &GameState, roll: Roll) -> MoveList {
        let mut moves = MoveList::new();
        if roll.value() == 0 {
            return moves;
        }

        let who = state.turn();
        let path = self.paths().path(who);
        let distance = roll.value() as usize;

        if state.player_state(who).waiting() > 0 {
            if let Some(mv) = self.try_destination(state, who, path, None, distance - 1) {
                moves.push(mv);
            }
        }

        for (index, &tile) in path.iter().enumerate() {
            let source_piece = Piece {
                owner: who,
                path_index: index,
            };
            // The path index check matters on paths that revisit a tile:
            // the same tile is two different stops.
            if state.board().get(tile) != Some(source_piece) {
                continue;
            }
            let source = PathTile { tile, index };
            if let Some(mv) = self.try_destination(state, who, path, Some(source), index + distance)
            {
                moves.push(mv);
            }
        }
        moves
    }

    /// The move landing on `dest_index`, if the destination is playable.
    fn try_destination(
        &self,
        state: &GameState,
        who: Player,
        path: &[Tile],
        source: Option<PathTile>,
        dest_index: usize,
    ) -> Option<Move> {
        if dest_index >= path.len() {
            let scores = match self.paths().exit_rule() {
                ExitRule::RequireExact => dest_index == path.len(),
                ExitRule::ClipToExit => true,
            };
            return scores.then(|| Move::new(who, source, None, false));
        }

        let dest_tile = path[dest_index];
        let dest = PathTile {
            tile: dest_tile,
            index: dest_index,
        };
        match state.board().get(dest_tile) {
            Some(occupant) if occupant.owner == who => None,
            Some(_) => {
                if self.safe_rosettes() && self.board_shape().is_rosette(dest_tile) {
                    None
                } else {
                    Some(Move::new(who, source, Some(dest), true))
                }
            }
            None => Some(Move::new(who, source, Some(dest), false)),
        }
    }
}
