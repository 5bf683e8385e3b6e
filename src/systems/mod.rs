//! Game systems and observers.
//!
//! Submodules overview
//! - [`control`] – restart and quit keys
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the board, header, banners and debug overlay using Raylib
//! - [`turn`] – play one turn per direction key

pub mod control;
pub mod gamestate;
pub mod input;
pub mod render;
pub mod turn;
