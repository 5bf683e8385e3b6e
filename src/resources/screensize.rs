//! Screen size resource.
//!
//! Stores the current window dimensions in pixels. The board layout is
//! recomputed from it every frame so the grid follows window resizes.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
