//! tile2048 library.
//!
//! This module exposes the grid engine together with the ECS resources,
//! systems, and events of the windowed game, for use in integration tests.

pub mod events;
pub mod game;
pub mod grid;
pub mod resources;
pub mod systems;
