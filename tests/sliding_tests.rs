//! Sliding puzzle integration tests.
//!
//! These tests check layout, win detection, tile displacement, and the
//! invariants that hold across any sequence of moves.

use grid_puzzles::algo::is_even;
use grid_puzzles::core::{Cell, Direction, GridError};
use grid_puzzles::games::{
    run_moves, FixedPermutation, Game, GameStatus, PermutationSource, SlidingConfig, SlidingGame,
};
use proptest::prelude::*;

fn solved_game() -> SlidingGame<FixedPermutation> {
    let mut game = SlidingGame::new(&SlidingConfig::default(), FixedPermutation::solved(15)).unwrap();
    game.initialize().unwrap();
    game
}

/// Tiles row-major, with the vacant cell read as 0.
fn tiles(game: &SlidingGame<impl PermutationSource>) -> Vec<u32> {
    game.grid()
        .values_row_major()
        .into_iter()
        .map(|v| v.copied().unwrap_or(0))
        .collect()
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

// =============================================================================
// Layout and winning
// =============================================================================

#[test]
fn test_solved_start_has_won() {
    let game = solved_game();
    assert!(game.has_won());
    assert!(game.can_move());
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 4));
}

#[test]
fn test_one_move_from_solved_is_not_won() {
    let mut game = solved_game();
    game.process_move(Direction::Right).unwrap();
    assert!(!game.has_won());
    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 3));
}

#[test]
fn test_vacant_first_is_not_won() {
    // Tiles in order but the vacant cell is not last.
    let mut game = solved_game();
    for direction in [Direction::Right, Direction::Right, Direction::Right] {
        game.process_move(direction).unwrap();
    }
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 1));
    assert_eq!(&tiles(&game)[12..], &[0, 13, 14, 15]);
    assert!(!game.has_won());
}

#[test]
fn test_custom_permutation_layout() {
    let permutation: Vec<u32> = (1..=15).rev().collect();
    let mut game =
        SlidingGame::new(&SlidingConfig::default(), FixedPermutation(permutation)).unwrap();
    game.initialize().unwrap();

    assert_eq!(game.value_at(1, 1).unwrap(), Some(15));
    assert_eq!(game.value_at(4, 3).unwrap(), Some(1));
    assert_eq!(game.value_at(4, 4).unwrap(), None);
    assert_eq!(game.value_at(5, 1), Err(GridError::InvalidCoordinate { row: 5, col: 1 }));
}

#[test]
fn test_closure_permutation_source() {
    let source = |len: usize| (1..=len as u32).collect::<Vec<_>>();
    let mut game = SlidingGame::new(&SlidingConfig::default().with_width(3), source).unwrap();
    game.initialize().unwrap();
    assert!(game.has_won());
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(3, 3));
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_moves_walk_the_vacancy() {
    let mut game = solved_game();

    for direction in [Direction::Down, Direction::Down, Direction::Right] {
        game.process_move(direction).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(2, 3));
    assert_eq!(game.value_at(3, 4).unwrap(), Some(8));
    assert_eq!(game.value_at(4, 4).unwrap(), Some(12));
    assert_eq!(game.value_at(2, 4).unwrap(), Some(7));

    // Undo in reverse order with the opposite directions.
    for direction in [Direction::Left, Direction::Up, Direction::Up] {
        game.process_move(direction).unwrap();
    }
    assert!(game.has_won());
}

#[test]
fn test_driver_stops_on_solved_start() {
    let mut game = solved_game();
    let status = run_moves(&mut game, [Direction::Down, Direction::Right]).unwrap();
    assert_eq!(status, GameStatus::Won);
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 4));
}

#[test]
fn test_driver_plays_until_solved() {
    let mut game = solved_game();
    game.process_move(Direction::Down).unwrap();
    game.process_move(Direction::Right).unwrap();

    let status = run_moves(&mut game, [Direction::Left, Direction::Up, Direction::Down]).unwrap();
    assert_eq!(status, GameStatus::Won);
    // The trailing Down was never applied.
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 4));
}

#[test]
fn test_random_start_is_solvable_parity() {
    for seed in 0..20 {
        let mut game = SlidingGame::random(&SlidingConfig::default(), seed).unwrap();
        game.initialize().unwrap();

        assert_eq!(game.vacant_cell().unwrap(), Cell::new(4, 4));
        let tiles = tiles(&game);
        assert!(is_even(&tiles[..15]));
    }
}

#[test]
fn test_uninitialized_game_is_all_vacant() {
    let mut game = SlidingGame::new(&SlidingConfig::default(), FixedPermutation::solved(15)).unwrap();
    assert_eq!(game.vacant_cell().unwrap(), Cell::new(1, 1));
    // Nothing to slide: every neighbor is vacant too.
    game.process_move(Direction::Left).unwrap();
    assert!(game.grid().all(|v| v.is_none()));
}

#[test]
fn test_zero_width_has_no_vacancy() {
    let mut game = SlidingGame::new(&SlidingConfig::default().with_width(0), FixedPermutation(vec![])).unwrap();
    game.initialize().unwrap();
    assert_eq!(game.process_move(Direction::Up), Err(GridError::NoVacantCell));
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    /// Exactly one vacant cell, and the tiles stay a permutation of 1..=15.
    #[test]
    fn prop_moves_preserve_tiles(moves in prop::collection::vec(direction_strategy(), 0..60)) {
        let mut game = solved_game();
        for direction in moves {
            game.process_move(direction).unwrap();
        }

        let mut values = tiles(&game);
        prop_assert_eq!(values.iter().filter(|&&v| v == 0).count(), 1);
        values.sort_unstable();
        prop_assert_eq!(values, (0..=15).collect::<Vec<_>>());
    }

    /// Parity of tiles plus vacant row distance is invariant under moves.
    #[test]
    fn prop_moves_preserve_solvability(moves in prop::collection::vec(direction_strategy(), 0..60)) {
        let mut game = solved_game();
        for direction in moves {
            game.process_move(direction).unwrap();
        }

        let vacant = game.vacant_cell().unwrap();
        let occupied: Vec<u32> = tiles(&game).into_iter().filter(|&v| v != 0).collect();
        let row_distance = (4 - vacant.row) as usize;
        prop_assert_eq!(is_even(&occupied), row_distance % 2 == 0);
    }
}
