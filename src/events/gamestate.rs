//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Name of the one-shot system run when entering `state`, if any.
pub fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::Setup => Some("setup"),
        GameStates::GameOver => Some("enter_game_over"),
        GameStates::Quitting => Some("quit_game"),
        GameStates::None | GameStates::Playing => None,
    }
}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets
///   [`NextGameState`] to [`Unchanged`] and runs the enter hook named by
///   [`enter_hook`].
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        // Clone the next state value first so we don't keep an immutable borrow while mutating.
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                info!(
                    "Transitioning from {:?} to {:?}",
                    game_state.get(),
                    new_state
                );
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_enter(&new_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run the state-specific "enter" system for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = enter_hook(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(hook) {
        Some(system_id) => commands.run_system(*system_id),
        None => error!("System '{}' not found in SystemsStore", hook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_hooks() {
        assert_eq!(enter_hook(&GameStates::Setup), Some("setup"));
        assert_eq!(enter_hook(&GameStates::GameOver), Some("enter_game_over"));
        assert_eq!(enter_hook(&GameStates::Quitting), Some("quit_game"));
        assert_eq!(enter_hook(&GameStates::Playing), None);
        assert_eq!(enter_hook(&GameStates::None), None);
    }
}
