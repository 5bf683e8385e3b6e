//! Registry for dynamically addressable systems.
//!
//! State enter hooks (`"setup"`, `"enter_game_over"`, `"quit_game"`) are
//! registered as one-shot systems under string keys and looked up by the
//! game state observer when a transition is applied.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::*;

    fn noop() {}

    #[test]
    fn test_insert_and_get() {
        let mut world = World::new();
        let id = world.register_system(noop);
        let mut store = SystemsStore::new();
        store.insert("setup", id);
        assert_eq!(store.get("setup"), Some(&id));
        assert!(store.get("missing").is_none());
    }
}
