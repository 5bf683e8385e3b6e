//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use the arrow keys for
//! primary movement and WASD as an alternative.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // Arrow keys
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    // WASD
    pub alt_up: BoolState,
    pub alt_down: BoolState,
    pub alt_left: BoolState,
    pub alt_right: BoolState,
    // Action keys
    pub action_restart: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            move_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            alt_up: BoolState::bound_to(KeyboardKey::KEY_W),
            alt_down: BoolState::bound_to(KeyboardKey::KEY_S),
            alt_left: BoolState::bound_to(KeyboardKey::KEY_A),
            alt_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action_restart: BoolState::bound_to(KeyboardKey::KEY_R),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Every key that maps to a gameplay [`InputAction`], paired with it.
    ///
    /// The debug toggle is not included; it has its own event.
    pub fn bindings_mut(&mut self) -> [(InputAction, &mut BoolState); 10] {
        [
            (InputAction::MoveUp, &mut self.move_up),
            (InputAction::MoveDown, &mut self.move_down),
            (InputAction::MoveLeft, &mut self.move_left),
            (InputAction::MoveRight, &mut self.move_right),
            (InputAction::MoveUp, &mut self.alt_up),
            (InputAction::MoveDown, &mut self.alt_down),
            (InputAction::MoveLeft, &mut self.alt_left),
            (InputAction::MoveRight, &mut self.alt_right),
            (InputAction::Restart, &mut self.action_restart),
            (InputAction::Back, &mut self.action_back),
        ]
    }
}
