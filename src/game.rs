//! State enter hooks.
//!
//! These one-shot systems are registered in [`SystemsStore`] by
//! [`register_state_hooks`] and run by the game state observer when the
//! matching state is entered:
//!
//! - `"setup"` ([`setup`]) – deal a new board, then go to Playing
//! - `"enter_game_over"` ([`enter_game_over`]) – compute the final score
//! - `"quit_game"` ([`quit_game`]) – ask the main loop to exit

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::grid::GridEngine;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;

/// Register every state hook and insert the resulting [`SystemsStore`].
pub fn register_state_hooks(world: &mut World) {
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(setup);
    systems_store.insert("setup", setup_system_id);

    let enter_game_over_system_id = world.register_system(enter_game_over);
    systems_store.insert("enter_game_over", enter_game_over_system_id);

    let quit_game_system_id = world.register_system(quit_game);
    systems_store.insert("quit_game", quit_game_system_id);

    world.insert_resource(systems_store);
}

/// Clear the board, place the two starting tiles and start playing.
pub fn setup(
    mut grid: ResMut<GridEngine>,
    mut worldsignals: ResMut<WorldSignals>,
    mut next_state: ResMut<NextGameState>,
) {
    if let Err(e) = grid.start() {
        error!("Failed to deal a new board: {}", e);
        return;
    }
    worldsignals.set_integer("moves", 0);
    worldsignals.remove_integer("final_score");
    info!("New board dealt\n{}", *grid);

    next_state.set(GameStates::Playing);
}

/// Compute the score shown on the game over banner.
///
/// This is the highest tile on the board, not the running merge score; both
/// are logged.
pub fn enter_game_over(grid: Res<GridEngine>, mut worldsignals: ResMut<WorldSignals>) {
    let final_score = grid.final_score();
    worldsignals.set_integer("final_score", final_score as i64);
    info!(
        "Game Over! Your score: {} (merge score {}, moves {})",
        final_score,
        grid.score(),
        worldsignals.get_integer("moves").unwrap_or(0)
    );
}

/// Ask the main loop to exit.
pub fn quit_game(mut worldsignals: ResMut<WorldSignals>) {
    info!("Quitting game");
    worldsignals.set_flag("quit_game");
}
