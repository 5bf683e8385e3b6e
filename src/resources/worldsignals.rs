//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide map for cross-system
//! communication that does not belong to the board itself.
//!
//! Keys used by the game:
//! - `"moves"` – number of moves that changed the board this game
//! - `"final_score"` – score shown by the game over banner
//! - `"quit_game"` (flag) – main loop exits when set

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i64>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.integers.get(key).copied()
    }
    /// Add `delta` to an integer signal, treating a missing key as zero.
    pub fn add_integer(&mut self, key: &str, delta: i64) -> i64 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += delta;
        *value
    }
    /// Remove an integer signal. Returns the removed value if it existed.
    pub fn remove_integer(&mut self, key: &str) -> Option<i64> {
        self.integers.remove(key)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
