//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 400
//! height = 480
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! seed = 1234
//! palette = ./palette.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 400;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings plus the optional RNG seed and palette file.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Seed for tile spawns. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// JSON tile palette. `None` uses the built-in colours.
    pub palette_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            seed: None,
            palette_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = get_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
        if let Some(palette) = config.get("game", "palette") {
            if !palette.trim().is_empty() {
                self.palette_path = Some(PathBuf::from(palette.trim()));
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, seed={:?}, palette={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.seed,
            self.palette_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [game] section
        if let Some(seed) = self.seed {
            config.set("game", "seed", Some(seed.to_string()));
        }
        if let Some(palette) = &self.palette_path {
            config.set("game", "palette", Some(palette.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size in the signed pixels raylib expects.
    ///
    /// A dimension too large for `i32` falls back to its default.
    pub fn window_size(&self) -> (i32, i32) {
        (
            to_pixels(self.window_width, DEFAULT_WINDOW_WIDTH, "width"),
            to_pixels(self.window_height, DEFAULT_WINDOW_HEIGHT, "height"),
        )
    }
}

/// Read an unsigned key that must fit in `u32`; out of range values are ignored.
fn get_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("[{}] {} = {} is out of range; keeping the default", section, key, value);
            None
        }
    }
}

fn to_pixels(value: u32, default: u32, name: &str) -> i32 {
    i32::try_from(value).unwrap_or_else(|_| {
        warn!("Window {} {} is out of range; using {}", name, value, default);
        default as i32
    })
}
