//! Restart and quit keys.
//!
//! [`control_observer`] turns [`InputAction::Restart`] into a transition to
//! [`GameStates::Setup`] (which deals a new board) and [`InputAction::Back`]
//! into [`GameStates::Quitting`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};

/// Observer that requests restart/quit transitions.
pub fn control_observer(
    trigger: On<InputEvent>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    match (trigger.event().action, state.get()) {
        (InputAction::Restart, GameStates::Playing | GameStates::GameOver) => {
            info!("Restart requested");
            next_state.set(GameStates::Setup);
        }
        (InputAction::Back, GameStates::Quitting) => {}
        (InputAction::Back, _) => {
            info!("Quit requested");
            next_state.set(GameStates::Quitting);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::gamestate::NextGameStates;
    use bevy_ecs::observer::Observer;

    fn world_in(state: GameStates) -> World {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(state);
        world.insert_resource(game_state);
        world.insert_resource(NextGameState::new());
        world.spawn(Observer::new(control_observer));
        world.flush();
        world
    }

    fn next(world: &World) -> NextGameStates {
        world.resource::<NextGameState>().get().clone()
    }

    #[test]
    fn test_restart_from_game_over_requests_setup() {
        let mut world = world_in(GameStates::GameOver);
        world.trigger(InputEvent {
            action: InputAction::Restart,
        });
        assert_eq!(next(&world), NextGameStates::Pending(GameStates::Setup));
    }

    #[test]
    fn test_restart_ignored_during_setup() {
        let mut world = world_in(GameStates::Setup);
        world.trigger(InputEvent {
            action: InputAction::Restart,
        });
        assert_eq!(next(&world), NextGameStates::Unchanged);
    }

    #[test]
    fn test_back_requests_quit_once() {
        let mut world = world_in(GameStates::Playing);
        world.trigger(InputEvent {
            action: InputAction::Back,
        });
        assert_eq!(next(&world), NextGameStates::Pending(GameStates::Quitting));

        let mut world = world_in(GameStates::Quitting);
        world.trigger(InputEvent {
            action: InputAction::Back,
        });
        assert_eq!(next(&world), NextGameStates::Unchanged);
    }

    #[test]
    fn test_direction_keys_do_not_change_state() {
        let mut world = world_in(GameStates::Playing);
        world.trigger(InputEvent {
            action: InputAction::MoveLeft,
        });
        assert_eq!(next(&world), NextGameStates::Unchanged);
    }
}
