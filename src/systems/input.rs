//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Input events are emitted for key presses (e.g., toggling debug mode via
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)).
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::input::InputEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Refresh `state` from the keyboard. Returns whether the key just went down.
fn poll_key(rl: &RaylibHandle, state: &mut BoolState) -> bool {
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_pressed
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    if poll_key(&rl, &mut input.mode_debug) {
        commands.trigger(SwitchDebugEvent {});
    }

    for (action, state) in input.bindings_mut() {
        if poll_key(&rl, state) {
            commands.trigger(InputEvent { action });
        }
    }
}
