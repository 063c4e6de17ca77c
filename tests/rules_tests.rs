//! Rule set integration tests.
//!
//! These tests exercise the roll/move state machine end to end across the
//! named rule sets, with a focus on the interactions between policies:
//! extra rolls, safe rosettes, exit rules, and turn passing.

use ur_engine::{
    Board, ExitRule, GameError, GameState, PathPair, Phase, Piece, Player, PlayerState, Roll,
    RuleSet, Tile,
};

// =============================================================================
// Helpers
// =============================================================================

/// Build a mid-game state by placing pieces at path indices and deriving
/// consistent pools.
fn state_with_pieces(
    rules: &RuleSet,
    light_indices: &[usize],
    dark_indices: &[usize],
    turn: Player,
) -> GameState {
    let mut board = Board::new(rules.board_shape());
    for &index in light_indices {
        board.set(
            rules.paths().path(Player::Light)[index],
            Piece {
                owner: Player::Light,
                path_index: index,
            },
        );
    }
    for &index in dark_indices {
        board.set(
            rules.paths().path(Player::Dark)[index],
            Piece {
                owner: Player::Dark,
                path_index: index,
            },
        );
    }
    let count = rules.starting_piece_count();
    GameState::new(
        board,
        PlayerState::new(Player::Light, count - light_indices.len() as u8, 0),
        PlayerState::new(Player::Dark, count - dark_indices.len() as u8, 0),
        turn,
        Phase::AwaitingRoll,
        None,
    )
}

/// Total pieces of a player across waiting, board, and scored pools.
fn total_pieces(state: &GameState, player: Player) -> u8 {
    state.player_state(player).waiting()
        + state.board().count_pieces(player)
        + state.player_state(player).scored()
}

// =============================================================================
// Opening Play
// =============================================================================

/// The classic opening: a roll of four enters a piece directly onto the
/// first rosette, and the rosette grants another roll.
#[test]
fn test_finkel_opening_four_lands_on_rosette_and_rolls_again() {
    let rules = RuleSet::finkel();
    let state = rules.initial_state();

    let rolled = rules.apply_roll(&state, Roll::new(4)).unwrap();
    let moves = rules.find_available_moves(&rolled, Roll::new(4));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].describe(), "Introduce a piece to A1.");

    let next = rules.apply_move(&rolled, &moves[0]).unwrap();
    assert_eq!(next.turn(), Player::Light);
    assert_eq!(next.phase(), Phase::AwaitingRoll);
    assert_eq!(
        next.board().get("A1".parse::<Tile>().unwrap()).map(|piece| piece.owner),
        Some(Player::Light)
    );
}

/// A roll of zero passes the turn without a move phase.
#[test]
fn test_roll_of_zero_is_a_natural_pass() {
    let rules = RuleSet::finkel();
    let state = rules.initial_state();

    let passed = rules.apply_roll(&state, Roll::new(0)).unwrap();
    assert_eq!(passed.turn(), Player::Dark);
    assert_eq!(passed.phase(), Phase::AwaitingRoll);
    assert_eq!(passed.board(), state.board());
}

// =============================================================================
// Extra-Roll Policies
// =============================================================================

/// Rosette landings keep the turn only under rules that say so.
#[test]
fn test_rosette_extra_roll_matrix() {
    for (grant, expected_turn) in [(true, Player::Light), (false, Player::Dark)] {
        let rules = RuleSet::finkel().with_rosettes_grant_extra_rolls(grant);
        let rolled = rules
            .apply_roll(&rules.initial_state(), Roll::new(4))
            .unwrap();
        let moves = rules.find_available_moves(&rolled, Roll::new(4));
        let next = rules.apply_move(&rolled, &moves[0]).unwrap();
        assert_eq!(next.turn(), expected_turn);
    }
}

/// Captures keep the turn only under rules that say so.
#[test]
fn test_capture_extra_roll_matrix() {
    for (grant, expected_turn) in [(true, Player::Light), (false, Player::Dark)] {
        let rules = RuleSet::finkel().with_captures_grant_extra_rolls(grant);
        // Light on the shared lane, dark one step ahead of it.
        let dark_tile = rules.paths().path(Player::Light)[5];
        let dark_index = rules
            .paths()
            .path(Player::Dark)
            .iter()
            .position(|&tile| tile == dark_tile)
            .unwrap();
        let state = state_with_pieces(&rules, &[4], &[dark_index], Player::Light);

        let rolled = rules.apply_roll(&state, Roll::new(1)).unwrap();
        let capture = rules
            .find_available_moves(&rolled, Roll::new(1))
            .into_iter()
            .find(|mv| mv.is_capture())
            .unwrap();
        let next = rules.apply_move(&rolled, &capture).unwrap();

        assert_eq!(next.turn(), expected_turn);
        assert_eq!(next.player_state(Player::Dark).waiting(), 7);
    }
}

// =============================================================================
// Safe Rosettes
// =============================================================================

/// Under Finkel rules a piece on the central rosette cannot be captured,
/// but the same position under Masters-style rules can.
#[test]
fn test_safe_rosette_blocks_the_capture_masters_allows_it() {
    let rosette = Tile::new(2, 4).unwrap();
    let safe = RuleSet::finkel();
    let light_index = safe
        .paths()
        .path(Player::Light)
        .iter()
        .position(|&tile| tile == rosette)
        .unwrap();
    let dark_index = safe
        .paths()
        .path(Player::Dark)
        .iter()
        .position(|&tile| tile == rosette)
        .unwrap();

    let state = state_with_pieces(&safe, &[light_index - 1], &[dark_index], Player::Light);
    let rolled = safe.apply_roll(&state, Roll::new(1)).unwrap();
    assert!(safe
        .find_available_moves(&rolled, Roll::new(1))
        .iter()
        .all(|mv| !mv.is_capture()));

    let unsafe_rules = RuleSet::finkel().with_safe_rosettes(false);
    let rolled = unsafe_rules.apply_roll(&state, Roll::new(1)).unwrap();
    assert!(unsafe_rules
        .find_available_moves(&rolled, Roll::new(1))
        .iter()
        .any(|mv| mv.is_capture()));
}

// =============================================================================
// Exit Rules
// =============================================================================

/// The default exit rule demands an exact landing; clipping scores any
/// overshoot.
#[test]
fn test_exit_rules_decide_overshoots() {
    let exact = RuleSet::finkel();
    let last = exact.paths().path(Player::Light).len() - 1;
    let state = state_with_pieces(&exact, &[last], &[], Player::Light);

    // Overshooting by one: no move for that piece, only the introduction.
    let rolled = exact.apply_roll(&state, Roll::new(2)).unwrap();
    assert!(exact
        .find_available_moves(&rolled, Roll::new(2))
        .iter()
        .all(|mv| !mv.is_score()));

    let clipped = RuleSet::finkel()
        .with_paths(PathPair::bell().with_exit_rule(ExitRule::ClipToExit))
        .unwrap();
    let state = state_with_pieces(&clipped, &[last], &[], Player::Light);
    let rolled = clipped.apply_roll(&state, Roll::new(2)).unwrap();
    assert!(clipped
        .find_available_moves(&rolled, Roll::new(2))
        .iter()
        .any(|mv| mv.is_score()));
}

// =============================================================================
// Winning and Terminal Behavior
// =============================================================================

/// Scoring the final piece finishes the game, and the finished state
/// rejects every further transition.
#[test]
fn test_win_and_terminal_absorption() {
    let rules = RuleSet::finkel();
    let last = rules.paths().path(Player::Light).len() - 1;
    let mut state = state_with_pieces(&rules, &[last], &[], Player::Light);
    // Six pieces already scored, one on the final stop.
    state = GameState::new(
        state.board().clone(),
        PlayerState::new(Player::Light, 0, 6),
        state.player_state(Player::Dark),
        Player::Light,
        Phase::AwaitingRoll,
        None,
    );

    let rolled = rules.apply_roll(&state, Roll::new(1)).unwrap();
    let score = rules
        .find_available_moves(&rolled, Roll::new(1))
        .into_iter()
        .find(|mv| mv.is_score())
        .unwrap();
    let finished = rules.apply_move(&rolled, &score).unwrap();

    assert!(finished.is_finished());
    assert_eq!(finished.winner(), Some(Player::Light));
    assert_eq!(finished.describe(), "Light won.");

    assert_eq!(
        rules.apply_roll(&finished, Roll::new(2)),
        Err(GameError::GameFinished)
    );
    assert_eq!(
        rules.apply_move(&finished, &score),
        Err(GameError::GameFinished)
    );
}

// =============================================================================
// Conservation
// =============================================================================

/// Every transition preserves each player's total piece count across the
/// waiting, board, and scored pools.
#[test]
fn test_transitions_conserve_pieces() {
    let rules = RuleSet::finkel();
    let dark_tile = rules.paths().path(Player::Light)[6];
    let dark_index = rules
        .paths()
        .path(Player::Dark)
        .iter()
        .position(|&tile| tile == dark_tile)
        .unwrap();
    let state = state_with_pieces(&rules, &[4], &[dark_index], Player::Light);

    for roll in 1..=4 {
        let rolled = rules.apply_roll(&state, Roll::new(roll)).unwrap();
        for mv in rules.find_available_moves(&rolled, Roll::new(roll)) {
            let next = rules.apply_move(&rolled, &mv).unwrap();
            for player in [Player::Light, Player::Dark] {
                assert_eq!(
                    total_pieces(&next, player),
                    rules.starting_piece_count(),
                    "pieces not conserved by {mv}"
                );
            }
        }
    }
}

// =============================================================================
// Aseb
// =============================================================================

/// The Aseb rule set plays on its own board and paths with five pieces.
#[test]
fn test_aseb_opening() {
    let rules = RuleSet::aseb();
    let state = rules.initial_state();
    assert_eq!(state.player_state(Player::Light).waiting(), 5);

    let rolled = rules.apply_roll(&state, Roll::new(1)).unwrap();
    let moves = rules.find_available_moves(&rolled, Roll::new(1));
    assert_eq!(moves.len(), 1);
    assert_eq!(
        moves[0].dest().unwrap().tile,
        rules.paths().path(Player::Light)[0]
    );
}
