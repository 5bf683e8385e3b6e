//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. The board itself is
//! [`crate::grid::GridEngine`], also inserted as a resource.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window settings, seed and palette path from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `palette` – tile colours keyed by exponent
//! - `screensize` – current window dimensions in pixels
//! - `systemsstore` – registry of state hook systems by name
//! - `worldsignals` – global counters and flags (moves, final score, quit)
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod palette;
pub mod screensize;
pub mod systemsstore;
pub mod worldsignals;
