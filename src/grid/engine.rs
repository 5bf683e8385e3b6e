//! The [`GridEngine`] owns the board, the running score and the RNG used for
//! spawning tiles. It is inserted into the ECS world as a resource, but none of
//! its methods depend on the world.

use std::fmt;

use bevy_ecs::prelude::Resource;
use log::debug;
use smallvec::SmallVec;

use super::ops;
use super::{Cells, Direction, GridError, MoveResult, SIZE, SPAWN_VALUE};

/// Coordinates of empty cells, `(row, col)`.
pub type EmptyCells = SmallVec<[(usize, usize); SIZE * SIZE]>;

/// Board state plus the rules that mutate it.
#[derive(Resource, Debug, Clone)]
pub struct GridEngine {
    cells: Cells,
    score: u32,
    rng: fastrand::Rng,
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GridEngine {
    /// Empty board, zero score, entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
            score: 0,
            rng: fastrand::Rng::new(),
        }
    }

    /// Empty board whose tile spawns are reproducible for a given `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            ..Self::new()
        }
    }

    /// Board preloaded with `cells` and a zero score.
    ///
    /// Every non-zero cell must be a power of two of at least 2.
    pub fn from_rows(cells: Cells) -> Self {
        debug_assert!(
            cells
                .iter()
                .flatten()
                .all(|&v| v == 0 || (v.is_power_of_two() && v >= 2)),
            "tiles must be 0 or 2^k with k >= 1: {:?}",
            cells
        );
        Self {
            cells,
            ..Self::new()
        }
    }

    /// Read-only view of the board.
    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Value at `(row, col)`; zero means empty.
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Running score: the sum of every tile produced by a merge.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Clear the board and the score.
    pub fn reset(&mut self) {
        self.cells = [[0; SIZE]; SIZE];
        self.score = 0;
    }

    /// Start a new game: reset, then place two tiles on distinct cells.
    pub fn start(&mut self) -> Result<(), GridError> {
        self.reset();
        self.spawn_tile()?;
        self.spawn_tile()?;
        Ok(())
    }

    /// Slide every tile towards `direction`, merging equal neighbours.
    ///
    /// `changed` comes from the first compression and the merge pass only;
    /// the compression that closes the gaps left by merges cannot set it on
    /// its own.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        ops::canonicalize(&mut self.cells, direction);
        let shifted = ops::compress(&mut self.cells);
        let score_delta = ops::merge(&mut self.cells);
        ops::compress(&mut self.cells);
        ops::restore(&mut self.cells, direction);

        self.score += score_delta;
        let result = MoveResult {
            changed: shifted || score_delta > 0,
            score_delta,
        };
        debug!(
            "move {:?}: changed={} delta={} score={}",
            direction, result.changed, result.score_delta, self.score
        );
        result
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> EmptyCells {
        let mut empty = EmptyCells::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value == 0 {
                    empty.push((i, j));
                }
            }
        }
        empty
    }

    /// Put a `2` on an empty cell chosen uniformly at random.
    ///
    /// Returns the chosen `(row, col)`. Calling this on a full board is a
    /// caller bug and yields [`GridError::BoardFull`].
    pub fn spawn_tile(&mut self) -> Result<(usize, usize), GridError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(GridError::BoardFull);
        }
        let (row, col) = empty[self.rng.usize(..empty.len())];
        self.cells[row][col] = SPAWN_VALUE;
        Ok((row, col))
    }

    /// Whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    /// Whether two horizontally or vertically adjacent tiles are equal.
    pub fn can_merge(&self) -> bool {
        for i in 0..SIZE {
            for j in 0..SIZE - 1 {
                let value = self.cells[i][j];
                if value != 0 && value == self.cells[i][j + 1] {
                    return true;
                }
            }
        }
        for i in 0..SIZE - 1 {
            for j in 0..SIZE {
                let value = self.cells[i][j];
                if value != 0 && value == self.cells[i + 1][j] {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no mergeable pair: no move can change the board.
    pub fn is_game_over(&self) -> bool {
        self.is_full() && !self.can_merge()
    }

    /// Largest tile on the board, zero when empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Score reported when the game ends: the highest tile, rebuilt from its
    /// exponent. Unrelated to [`GridEngine::score`].
    pub fn final_score(&self) -> u32 {
        match super::tile_exponent(self.max_tile()) {
            Some(exponent) => 1 << exponent,
            None => 0,
        }
    }
}

impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "score: {}", self.score)
    }
}
