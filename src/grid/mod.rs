//! Grid engine for the sliding-tile puzzle.
//!
//! Everything that decides how tiles move lives here and has no dependency on
//! the window or the ECS schedule, so it can be exercised directly from tests.
//!
//! - [`ops`] – row/board primitives: compress, merge, transpose, reverse
//! - [`engine`] – the [`GridEngine`] value owning the board, score and RNG
//!
//! A move is always reduced to "slide left": the board is re-oriented for the
//! requested [`Direction`], compressed, merged in a single left-to-right pass,
//! compressed again and finally restored to its true orientation.

pub mod engine;
pub mod ops;

use std::fmt;

pub use engine::GridEngine;

/// Board dimension. The board is always `SIZE` x `SIZE`.
pub const SIZE: usize = 4;

/// Value of every freshly spawned tile.
pub const SPAWN_VALUE: u32 = 2;

/// One row of the board, left to right.
pub type Row = [u32; SIZE];

/// The full board, indexed `[row][col]`. Zero means empty.
pub type Cells = [Row; SIZE];

/// A direction to slide the tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in no particular priority.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Outcome of a single [`GridEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any tile slid or merged. A new tile spawns only when this is set.
    pub changed: bool,
    /// Sum of the values produced by merges during this move.
    pub score_delta: u32,
}

/// Contract violations reported by the grid engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A tile was requested but every cell is occupied.
    BoardFull,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BoardFull => write!(f, "cannot spawn a tile: the board has no empty cell"),
        }
    }
}

impl std::error::Error for GridError {}

/// Exponent `k` of a tile holding `2^k`, or `None` for an empty cell.
///
/// Computed from the bit position so large tiles never suffer the rounding
/// a floating-point `log2` round trip would introduce.
pub fn tile_exponent(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(value.trailing_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_exponent_empty() {
        assert_eq!(tile_exponent(0), None);
    }

    #[test]
    fn test_tile_exponent_powers_of_two() {
        assert_eq!(tile_exponent(2), Some(1));
        assert_eq!(tile_exponent(1024), Some(10));
        assert_eq!(tile_exponent(1 << 30), Some(30));
    }

    #[test]
    fn test_grid_error_display() {
        let msg = GridError::BoardFull.to_string();
        assert!(msg.contains("no empty cell"));
    }
}
