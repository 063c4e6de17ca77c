//! Rule sets: the immutable aggregate a game is played under.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::model::{BoardShape, Dice, PathPair, Player};

/// A complete set of rules for one game.
///
/// Every variant, named or custom, is a plain value of this one structure:
/// a board shape, the pair of player paths, a dice model, a starting piece
/// count, and three boolean policies. The engine contains no special cases
/// per variant.
///
/// Construction validates the aggregate; once a `RuleSet` exists, no
/// configuration error can surface during play.
///
/// ```
/// use ur_engine::{Dice, RuleSet};
///
/// let rules = RuleSet::finkel();
/// assert_eq!(rules.starting_piece_count(), 7);
///
/// // Variants are derived by composition.
/// let custom = rules
///     .with_dice(Dice::three_binary_zero_as_max())
///     .with_captures_grant_extra_rolls(true);
/// assert!(custom.captures_grant_extra_rolls());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    board_shape: BoardShape,
    paths: PathPair,
    dice: Dice,
    starting_piece_count: u8,
    safe_rosettes: bool,
    rosettes_grant_extra_rolls: bool,
    captures_grant_extra_rolls: bool,
}

impl RuleSet {
    /// Assemble and validate a rule set.
    ///
    /// Fails if the starting piece count is zero, or if either player's
    /// path visits a tile the board shape does not contain.
    pub fn new(
        board_shape: BoardShape,
        paths: PathPair,
        dice: Dice,
        starting_piece_count: u8,
        safe_rosettes: bool,
        rosettes_grant_extra_rolls: bool,
        captures_grant_extra_rolls: bool,
    ) -> Result<Self, RulesError> {
        if starting_piece_count == 0 {
            return Err(RulesError::NoStartingPieces);
        }
        for player in [Player::Light, Player::Dark] {
            for &tile in paths.path(player) {
                if !board_shape.contains(tile) {
                    return Err(RulesError::PathTileOffBoard { player, tile });
                }
            }
        }

        Ok(Self {
            board_shape,
            paths,
            dice,
            starting_piece_count,
            safe_rosettes,
            rosettes_grant_extra_rolls,
            captures_grant_extra_rolls,
        })
    }

    /// The rules used in the game between Tom Scott and Irving Finkel:
    /// the standard board, Bell's paths, four binary dice, seven pieces,
    /// safe rosettes that grant an extra roll, and no reward for captures.
    #[must_use]
    pub fn finkel() -> Self {
        Self {
            board_shape: BoardShape::standard(),
            paths: PathPair::bell(),
            dice: Dice::four_binary(),
            starting_piece_count: 7,
            safe_rosettes: true,
            rosettes_grant_extra_rolls: true,
            captures_grant_extra_rolls: false,
        }
    }

    /// The rules proposed by James Masters: his longer paths over the
    /// standard board, with rosettes that are not safe from capture.
    #[must_use]
    pub fn masters() -> Self {
        Self {
            board_shape: BoardShape::standard(),
            paths: PathPair::masters(),
            dice: Dice::four_binary(),
            starting_piece_count: 7,
            safe_rosettes: false,
            rosettes_grant_extra_rolls: true,
            captures_grant_extra_rolls: false,
        }
    }

    /// The rules of Aseb, the Egyptian game of twenty squares: the Aseb
    /// board and paths with five pieces per player.
    #[must_use]
    pub fn aseb() -> Self {
        Self {
            board_shape: BoardShape::aseb(),
            paths: PathPair::aseb(),
            dice: Dice::four_binary(),
            starting_piece_count: 5,
            safe_rosettes: true,
            rosettes_grant_extra_rolls: true,
            captures_grant_extra_rolls: false,
        }
    }

    /// The shape of the game board.
    #[must_use]
    pub fn board_shape(&self) -> &BoardShape {
        &self.board_shape
    }

    /// The paths each player's pieces travel.
    #[must_use]
    pub fn paths(&self) -> &PathPair {
        &self.paths
    }

    /// The dice rolled to move.
    #[must_use]
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// The number of pieces each player starts with.
    #[must_use]
    pub fn starting_piece_count(&self) -> u8 {
        self.starting_piece_count
    }

    /// Whether pieces on rosette tiles are safe from capture.
    #[must_use]
    pub fn safe_rosettes(&self) -> bool {
        self.safe_rosettes
    }

    /// Whether landing on a rosette grants another roll.
    #[must_use]
    pub fn rosettes_grant_extra_rolls(&self) -> bool {
        self.rosettes_grant_extra_rolls
    }

    /// Whether capturing a piece grants another roll.
    #[must_use]
    pub fn captures_grant_extra_rolls(&self) -> bool {
        self.captures_grant_extra_rolls
    }

    /// A copy of these rules with a different board shape. Re-validates the
    /// paths against the new shape.
    pub fn with_board_shape(self, board_shape: BoardShape) -> Result<Self, RulesError> {
        Self::new(
            board_shape,
            self.paths,
            self.dice,
            self.starting_piece_count,
            self.safe_rosettes,
            self.rosettes_grant_extra_rolls,
            self.captures_grant_extra_rolls,
        )
    }

    /// A copy of these rules with different paths. Re-validates the paths
    /// against the board shape.
    pub fn with_paths(self, paths: PathPair) -> Result<Self, RulesError> {
        Self::new(
            self.board_shape,
            paths,
            self.dice,
            self.starting_piece_count,
            self.safe_rosettes,
            self.rosettes_grant_extra_rolls,
            self.captures_grant_extra_rolls,
        )
    }

    /// A copy of these rules with a different dice model.
    #[must_use]
    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    /// A copy of these rules with a different starting piece count.
    pub fn with_starting_piece_count(self, starting_piece_count: u8) -> Result<Self, RulesError> {
        if starting_piece_count == 0 {
            return Err(RulesError::NoStartingPieces);
        }
        Ok(Self {
            starting_piece_count,
            ..self
        })
    }

    /// A copy of these rules with rosette safety changed.
    #[must_use]
    pub fn with_safe_rosettes(mut self, safe_rosettes: bool) -> Self {
        self.safe_rosettes = safe_rosettes;
        self
    }

    /// A copy of these rules with the rosette extra-roll policy changed.
    #[must_use]
    pub fn with_rosettes_grant_extra_rolls(mut self, grant: bool) -> Self {
        self.rosettes_grant_extra_rolls = grant;
        self
    }

    /// A copy of these rules with the capture extra-roll policy changed.
    #[must_use]
    pub fn with_captures_grant_extra_rolls(mut self, grant: bool) -> Self {
        self.captures_grant_extra_rolls = grant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExitRule;

    #[test]
    fn test_finkel_preset() {
        let rules = RuleSet::finkel();

        assert_eq!(rules.board_shape().name(), "Standard");
        assert_eq!(rules.paths().name(), "Bell");
        assert_eq!(rules.dice(), Dice::four_binary());
        assert_eq!(rules.starting_piece_count(), 7);
        assert!(rules.safe_rosettes());
        assert!(rules.rosettes_grant_extra_rolls());
        assert!(!rules.captures_grant_extra_rolls());
    }

    #[test]
    fn test_masters_preset() {
        let rules = RuleSet::masters();
        assert_eq!(rules.paths().name(), "Masters");
        assert!(!rules.safe_rosettes());
        assert!(rules.rosettes_grant_extra_rolls());
    }

    #[test]
    fn test_aseb_preset() {
        let rules = RuleSet::aseb();
        assert_eq!(rules.board_shape().name(), "Aseb");
        assert_eq!(rules.starting_piece_count(), 5);
    }

    #[test]
    fn test_new_rejects_zero_pieces() {
        let result = RuleSet::new(
            BoardShape::standard(),
            PathPair::bell(),
            Dice::four_binary(),
            0,
            true,
            true,
            false,
        );
        assert_eq!(result, Err(RulesError::NoStartingPieces));
    }

    #[test]
    fn test_new_rejects_paths_off_board() {
        // The Aseb paths reach row 12, which the standard board lacks.
        let result = RuleSet::new(
            BoardShape::standard(),
            PathPair::aseb(),
            Dice::four_binary(),
            7,
            true,
            true,
            false,
        );
        assert!(matches!(
            result,
            Err(RulesError::PathTileOffBoard {
                player: Player::Light,
                ..
            })
        ));
    }

    #[test]
    fn test_with_builders() {
        let rules = RuleSet::finkel()
            .with_safe_rosettes(false)
            .with_captures_grant_extra_rolls(true)
            .with_dice(Dice::three_binary_zero_as_max());

        assert!(!rules.safe_rosettes());
        assert!(rules.captures_grant_extra_rolls());
        assert_eq!(rules.dice().max_value(), 4);

        let fewer = rules.clone().with_starting_piece_count(3).unwrap();
        assert_eq!(fewer.starting_piece_count(), 3);
        assert!(rules.with_starting_piece_count(0).is_err());
    }

    #[test]
    fn test_with_paths_revalidates() {
        assert!(RuleSet::finkel().with_paths(PathPair::aseb()).is_err());
        assert!(RuleSet::finkel().with_paths(PathPair::masters()).is_ok());
    }

    #[test]
    fn test_custom_exit_rule_flows_through() {
        let rules = RuleSet::finkel()
            .with_paths(PathPair::bell().with_exit_rule(ExitRule::ClipToExit))
            .unwrap();
        assert_eq!(rules.paths().exit_rule(), ExitRule::ClipToExit);
    }
}
