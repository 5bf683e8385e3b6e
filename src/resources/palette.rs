//! Tile colour palette resource.
//!
//! Maps a tile to its background colour by the tile's exponent: a tile
//! holding `2^k` uses entry `k` of [`TilePalette::tiles`]. Tiles beyond the
//! end of the table reuse its last entry.
//!
//! The palette can be replaced by a JSON file:
//!
//! ```json
//! {
//!   "background": [250, 248, 239],
//!   "empty": [205, 193, 180],
//!   "text": [224, 255, 255],
//!   "tiles": [[255, 255, 255], [240, 128, 128], [255, 153, 102]]
//! }
//! ```
//!
//! Missing fields fall back to the built-in palette.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::grid::tile_exponent;

/// RGB triple as stored in the JSON palette.
pub type Rgb = [u8; 3];

/// Colours used to draw the board.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TilePalette {
    /// Window clear colour.
    pub background: Rgb,
    /// Colour of an empty cell.
    pub empty: Rgb,
    /// Tile label colour.
    pub text: Rgb,
    /// Tile colours indexed by exponent. Index 0 is never a real tile.
    pub tiles: Vec<Rgb>,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            background: [250, 248, 239],
            empty: [205, 193, 180],
            text: [224, 255, 255],
            tiles: vec![
                [255, 255, 255], // unused
                [240, 128, 128], // 2
                [255, 153, 102], // 4
                [255, 102, 51],  // 8
                [106, 90, 205],  // 16
                [0, 0, 255],     // 32
                [148, 0, 211],   // 64
                [64, 224, 208],  // 128
                [72, 61, 139],   // 256
                [0, 128, 128],   // 512
                [102, 204, 255], // 1024
            ],
        }
    }
}

fn rgb(c: Rgb) -> Color {
    Color::new(c[0], c[1], c[2], 255)
}

impl TilePalette {
    /// Loads a palette from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let palette: TilePalette = serde_json::from_str(&file_content)?;
        Ok(palette)
    }

    /// Background colour for a cell holding `value` (zero = empty).
    pub fn tile_color(&self, value: u32) -> Color {
        let Some(exponent) = tile_exponent(value) else {
            return rgb(self.empty);
        };
        let entry = self
            .tiles
            .get(exponent as usize)
            .or(self.tiles.last())
            .copied()
            .unwrap_or(self.empty);
        rgb(entry)
    }

    /// Window clear colour.
    pub fn background_color(&self) -> Color {
        rgb(self.background)
    }

    /// Tile label colour.
    pub fn text_color(&self) -> Color {
        rgb(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(color: Color, expected: Rgb) {
        assert_eq!((color.r, color.g, color.b), (expected[0], expected[1], expected[2]));
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_empty_cell_color() {
        let palette = TilePalette::default();
        assert_rgb(palette.tile_color(0), [205, 193, 180]);
    }

    #[test]
    fn test_color_by_exponent() {
        let palette = TilePalette::default();
        assert_rgb(palette.tile_color(2), [240, 128, 128]);
        assert_rgb(palette.tile_color(16), [106, 90, 205]);
        assert_rgb(palette.tile_color(1024), [102, 204, 255]);
    }

    #[test]
    fn test_tiles_past_table_reuse_last_color() {
        let palette = TilePalette::default();
        assert_rgb(palette.tile_color(2048), [102, 204, 255]);
        assert_rgb(palette.tile_color(1 << 17), [102, 204, 255]);
    }

    #[test]
    fn test_empty_table_falls_back_to_empty_color() {
        let palette = TilePalette {
            tiles: Vec::new(),
            ..TilePalette::default()
        };
        assert_rgb(palette.tile_color(8), [205, 193, 180]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let palette: TilePalette =
            serde_json::from_str(r#"{ "tiles": [[0, 0, 0], [1, 2, 3]] }"#).unwrap();
        assert_eq!(palette.tiles.len(), 2);
        assert_rgb(palette.tile_color(2), [1, 2, 3]);
        assert_eq!(palette.background, TilePalette::default().background);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = std::env::temp_dir().join("tile2048_no_such_palette.json");
        assert!(TilePalette::load_from_file(path).is_err());
    }
}
