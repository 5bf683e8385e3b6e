//! Board primitives.
//!
//! These are the building blocks of a move. Each one works on a single row or
//! on the whole board in place; none of them touch the score or the RNG.

use arrayvec::ArrayVec;

use super::{Cells, Direction, Row, SIZE};

/// Left-pack the non-zero values of `row`, keeping their order.
///
/// Returns `true` when at least one tile ended at a different index.
pub fn compress_row(row: &mut Row) -> bool {
    let mut packed: ArrayVec<u32, SIZE> = ArrayVec::new();
    let mut shifted = false;
    for (j, &value) in row.iter().enumerate() {
        if value != 0 {
            shifted |= packed.len() != j;
            packed.push(value);
        }
    }
    *row = [0; SIZE];
    row[..packed.len()].copy_from_slice(&packed);
    shifted
}

/// Merge equal neighbours in one left-to-right pass.
///
/// Pairs `(j, j + 1)` are compared in order using the values as they stand at
/// that step, so a freshly doubled tile is never compared with its old right
/// neighbour again: `[2, 2, 2, 2]` becomes `[4, 0, 4, 0]`.
///
/// Returns the sum of the doubled values (zero when nothing merged).
pub fn merge_row(row: &mut Row) -> u32 {
    let mut gained = 0;
    for j in 0..SIZE - 1 {
        if row[j] != 0 && row[j] == row[j + 1] {
            row[j] *= 2;
            row[j + 1] = 0;
            gained += row[j];
        }
    }
    gained
}

/// Compress every row. Returns `true` if any row shifted.
pub fn compress(cells: &mut Cells) -> bool {
    cells
        .iter_mut()
        .fold(false, |shifted, row| compress_row(row) | shifted)
}

/// Merge every row. Returns the total score gained.
pub fn merge(cells: &mut Cells) -> u32 {
    cells.iter_mut().map(merge_row).sum()
}

/// Swap rows and columns in place.
pub fn transpose(cells: &mut Cells) {
    for i in 0..SIZE {
        for j in (i + 1)..SIZE {
            let tmp = cells[i][j];
            cells[i][j] = cells[j][i];
            cells[j][i] = tmp;
        }
    }
}

/// Mirror every row left to right.
pub fn reverse_rows(cells: &mut Cells) {
    for row in cells.iter_mut() {
        row.reverse();
    }
}

/// Re-orient the board so that moving in `direction` becomes a left slide.
pub fn canonicalize(cells: &mut Cells, direction: Direction) {
    match direction {
        Direction::Left => {}
        Direction::Right => reverse_rows(cells),
        Direction::Up => transpose(cells),
        Direction::Down => {
            transpose(cells);
            reverse_rows(cells);
        }
    }
}

/// Undo [`canonicalize`] for the same `direction`.
pub fn restore(cells: &mut Cells, direction: Direction) {
    match direction {
        Direction::Left => {}
        Direction::Right => reverse_rows(cells),
        Direction::Up => transpose(cells),
        Direction::Down => {
            reverse_rows(cells);
            transpose(cells);
        }
    }
}
