//! One game turn per direction key.
//!
//! [`turn_observer`] listens for movement [`InputEvent`]s while the game is
//! [`GameStates::Playing`] and runs [`take_turn`]: slide, spawn when the board
//! changed, then check whether the board is stuck. A stuck board requests the
//! [`GameStates::GameOver`] transition.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info};

use crate::events::input::InputEvent;
use crate::grid::{Direction, GridEngine, GridError};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::worldsignals::WorldSignals;

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The slide or a merge changed the board.
    pub moved: bool,
    /// Score gained from merges.
    pub score_delta: u32,
    /// Cell that received the new tile, if one spawned.
    pub spawned: Option<(usize, usize)>,
    /// The board is stuck after this turn.
    pub game_over: bool,
}

/// Apply `direction`, spawn a tile if the board changed, and check for game over.
///
/// A turn that does not change the board never spawns and never ends the game.
pub fn take_turn(grid: &mut GridEngine, direction: Direction) -> Result<TurnOutcome, GridError> {
    let result = grid.apply_move(direction);
    if !result.changed {
        return Ok(TurnOutcome {
            moved: false,
            score_delta: 0,
            spawned: None,
            game_over: false,
        });
    }
    let spawned = grid.spawn_tile()?;
    Ok(TurnOutcome {
        moved: true,
        score_delta: result.score_delta,
        spawned: Some(spawned),
        game_over: grid.is_game_over(),
    })
}

/// Observer that plays a turn for each pressed direction key while playing.
pub fn turn_observer(
    trigger: On<InputEvent>,
    state: Res<GameState>,
    mut grid: ResMut<GridEngine>,
    mut next_state: ResMut<NextGameState>,
    mut signals: ResMut<WorldSignals>,
) {
    if !matches!(state.get(), GameStates::Playing) {
        return;
    }
    let Some(direction) = trigger.event().action.direction() else {
        return;
    };

    match take_turn(&mut grid, direction) {
        Ok(outcome) => {
            if !outcome.moved {
                debug!("{:?} does not change the board", direction);
                return;
            }
            signals.add_integer("moves", 1);
            debug!("\n{}", *grid);
            if outcome.game_over {
                info!("No moves left after {:?}", direction);
                next_state.set(GameStates::GameOver);
            }
        }
        Err(e) => {
            error!("Turn {:?} aborted: {}", direction, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SIZE;

    #[test]
    fn test_turn_without_change_does_not_spawn() {
        let mut grid = GridEngine::from_rows([[2, 4, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        let outcome = take_turn(&mut grid, Direction::Left).unwrap();
        assert!(!outcome.moved);
        assert_eq!(outcome.spawned, None);
        assert_eq!(grid.empty_cells().len(), SIZE * SIZE - 2);
    }

    #[test]
    fn test_turn_with_change_spawns_one_tile() {
        let mut grid = GridEngine::from_rows([[2, 2, 0, 0], [0; SIZE], [0; SIZE], [0; SIZE]]);
        let outcome = take_turn(&mut grid, Direction::Left).unwrap();
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        let (row, col) = outcome.spawned.unwrap();
        assert_eq!(grid.cell(row, col), 2);
        // The merged 4 plus the spawned 2.
        assert_eq!(grid.empty_cells().len(), SIZE * SIZE - 2);
        assert!(!outcome.game_over);
    }

    #[test]
    fn test_turn_that_fills_stuck_board_ends_game() {
        let mut grid = GridEngine::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [8, 8, 32, 64],
        ]);
        let outcome = take_turn(&mut grid, Direction::Left).unwrap();
        assert_eq!(outcome.spawned, Some((3, 3)));
        assert_eq!(grid.rows()[3], [16, 32, 64, 2]);
        assert!(outcome.game_over);
    }
}
