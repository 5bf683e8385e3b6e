//! Grid engine properties exercised through the public API only.

use tile2048::grid::ops::{reverse_rows, transpose};
use tile2048::grid::{Cells, Direction, GridEngine, GridError, SIZE};

fn tile_sum(cells: &Cells) -> u32 {
    cells.iter().flatten().sum()
}

fn tile_count(cells: &Cells) -> usize {
    cells.iter().flatten().filter(|&&v| v != 0).count()
}

/// Random board of small powers of two with some holes.
fn random_cells(rng: &mut fastrand::Rng) -> Cells {
    let mut cells = [[0; SIZE]; SIZE];
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            let exponent = rng.u32(0..5);
            *cell = if exponent == 0 { 0 } else { 1 << exponent };
        }
    }
    cells
}

#[test]
fn moves_conserve_tile_sum_and_account_for_merges() {
    let mut rng = fastrand::Rng::with_seed(2048);
    for _ in 0..200 {
        let cells = random_cells(&mut rng);
        for direction in Direction::ALL {
            let mut grid = GridEngine::from_rows(cells);
            let result = grid.apply_move(direction);

            assert_eq!(tile_sum(grid.rows()), tile_sum(&cells));
            assert_eq!(grid.score(), result.score_delta);
            if result.score_delta == 0 {
                assert_eq!(tile_count(grid.rows()), tile_count(&cells));
            } else {
                assert!(tile_count(grid.rows()) < tile_count(&cells));
                assert!(result.changed);
            }
            if !result.changed {
                assert_eq!(grid.rows(), &cells);
            }
        }
    }
}

#[test]
fn unchanged_move_repeated_is_stable() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let mut grid = GridEngine::from_rows(random_cells(&mut rng));
        for direction in Direction::ALL {
            while grid.apply_move(direction).changed {}
            let settled = *grid.rows();
            let score = grid.score();

            let again = grid.apply_move(direction);
            assert!(!again.changed);
            assert_eq!(again.score_delta, 0);
            assert_eq!(grid.rows(), &settled);
            assert_eq!(grid.score(), score);
        }
    }
}

#[test]
fn single_pass_merge_examples() {
    let mut grid = GridEngine::from_rows([[2, 2, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
    let result = grid.apply_move(Direction::Left);
    assert!(result.changed);
    assert_eq!(result.score_delta, 4);
    assert_eq!(grid.rows()[0], [4, 0, 0, 0]);

    let mut grid = GridEngine::from_rows([[2, 2, 2, 2], [0; SIZE], [0; SIZE], [0; SIZE]]);
    let result = grid.apply_move(Direction::Left);
    assert_eq!(result.score_delta, 8);
    assert_eq!(grid.rows()[0], [4, 4, 0, 0]);

    let mut grid = GridEngine::from_rows([[4, 4, 8, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
    grid.apply_move(Direction::Left);
    assert_eq!(grid.rows()[0], [8, 8, 0, 0]);
}

#[test]
fn every_direction_slides_towards_its_edge() {
    let column = [[2, 0, 0, 0], [2, 0, 0, 0], [0; SIZE], [4, 0, 0, 0]];

    let mut up = GridEngine::from_rows(column);
    up.apply_move(Direction::Up);
    assert_eq!(
        up.rows(),
        &[[4, 0, 0, 0], [4, 0, 0, 0], [0; SIZE], [0; SIZE]]
    );

    let mut down = GridEngine::from_rows(column);
    down.apply_move(Direction::Down);
    assert_eq!(
        down.rows(),
        &[[0; SIZE], [0; SIZE], [4, 0, 0, 0], [4, 0, 0, 0]]
    );

    let mut right = GridEngine::from_rows([[2, 0, 2, 4], [0; SIZE], [0; SIZE], [0; SIZE]]);
    right.apply_move(Direction::Right);
    assert_eq!(right.rows()[0], [0, 0, 4, 4]);
}

#[test]
fn empty_board_never_changes() {
    for direction in Direction::ALL {
        let mut grid = GridEngine::new();
        let result = grid.apply_move(direction);
        assert!(!result.changed);
        assert_eq!(result.score_delta, 0);
        assert_eq!(grid.rows(), &[[0; SIZE]; SIZE]);
    }
}

#[test]
fn game_over_detection() {
    let stuck = GridEngine::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(stuck.is_game_over());
    assert_eq!(stuck.final_score(), 4);

    let one_hole = GridEngine::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 0],
    ]);
    assert!(!one_hole.is_game_over());

    let mergeable = GridEngine::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 4],
    ]);
    assert!(!mergeable.is_game_over());
}

#[test]
fn spawn_fills_the_only_hole() {
    let mut grid = GridEngine::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 0, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert_eq!(grid.spawn_tile(), Ok((2, 1)));
    assert_eq!(grid.cell(2, 1), 2);
    assert!(grid.is_full());
    assert_eq!(grid.spawn_tile(), Err(GridError::BoardFull));
}

#[test]
fn seeded_games_are_reproducible() {
    let mut a = GridEngine::with_seed(99);
    let mut b = GridEngine::with_seed(99);
    a.start().unwrap();
    b.start().unwrap();
    assert_eq!(a.rows(), b.rows());
    assert_eq!(tile_count(a.rows()), 2);

    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        let moved_a = a.apply_move(direction);
        let moved_b = b.apply_move(direction);
        assert_eq!(moved_a, moved_b);
        if moved_a.changed {
            assert_eq!(a.spawn_tile(), b.spawn_tile());
        }
        assert_eq!(a.rows(), b.rows());
    }
}

#[test]
fn orientation_helpers_are_involutions() {
    let original: Cells = [
        [1, 2, 3, 4],
        [5, 6, 7, 8],
        [9, 10, 11, 12],
        [13, 14, 15, 16],
    ];
    let mut cells = original;
    transpose(&mut cells);
    assert_eq!(cells[0], [1, 5, 9, 13]);
    transpose(&mut cells);
    assert_eq!(cells, original);

    reverse_rows(&mut cells);
    assert_eq!(cells[0], [4, 3, 2, 1]);
    reverse_rows(&mut cells);
    assert_eq!(cells, original);
}

#[test]
fn final_score_is_the_highest_tile() {
    let grid = GridEngine::from_rows([[2, 1024, 0, 0], [0, 0, 131072, 0], [0; SIZE], [8, 0, 0, 0]]);
    assert_eq!(grid.final_score(), 131072);
    assert_eq!(GridEngine::new().final_score(), 0);
}
