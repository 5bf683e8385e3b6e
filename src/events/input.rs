//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when a
//! gameplay-relevant key is pressed. The [`InputAction`] enum lists all
//! recognized actions.
//!
//! Observers react to these events instead of reading the
//! [`InputState`](crate::resources::input::InputState) resource directly.

use bevy_ecs::prelude::*;

use crate::grid::Direction;

/// Enumeration of logical input actions.
///
/// These abstract the physical keys into gameplay-meaningful actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Slide up (default: Up arrow or W).
    MoveUp,
    /// Slide down (default: Down arrow or S).
    MoveDown,
    /// Slide left (default: Left arrow or A).
    MoveLeft,
    /// Slide right (default: Right arrow or D).
    MoveRight,
    /// Deal a new board (default: R).
    Restart,
    /// Quit the game (default: Escape).
    Back,
}

impl InputAction {
    /// The slide direction for movement actions, `None` otherwise.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputAction::MoveUp => Some(Direction::Up),
            InputAction::MoveDown => Some(Direction::Down),
            InputAction::MoveLeft => Some(Direction::Left),
            InputAction::MoveRight => Some(Direction::Right),
            InputAction::Restart | InputAction::Back => None,
        }
    }
}

/// Event emitted when the key bound to an input action goes down.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_mapping() {
        assert_eq!(InputAction::MoveUp.direction(), Some(Direction::Up));
        assert_eq!(InputAction::MoveDown.direction(), Some(Direction::Down));
        assert_eq!(InputAction::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(InputAction::MoveRight.direction(), Some(Direction::Right));
        assert_eq!(InputAction::Restart.direction(), None);
        assert_eq!(InputAction::Back.direction(), None);
    }
}
