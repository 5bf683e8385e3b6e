//! Board rendering.
//!
//! [`render_system`] draws one frame: the score line, the 4x4 board coloured
//! through [`TilePalette`], the game over banner and, while [`DebugMode`] is
//! present, a diagnostics overlay. Layout is recomputed from [`ScreenSize`]
//! every frame by [`board_layout`].

use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::grid::{GridEngine, SIZE};
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::palette::TilePalette;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

const HEADER_HEIGHT: i32 = 64;
const MARGIN: i32 = 12;
const GAP: i32 = 8;
const HEADER_FONT_SIZE: i32 = 24;
const BANNER_FONT_SIZE: i32 = 22;
const HINT_FONT_SIZE: i32 = 14;
const DEBUG_FONT_SIZE: i32 = 10;

/// Pixel geometry of the board for the current window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Left edge of the board.
    pub x: i32,
    /// Top edge of the board.
    pub y: i32,
    /// Width and height of the board including gaps.
    pub side: i32,
    /// Width and height of one cell.
    pub cell: i32,
    /// Space between cells and around the edge.
    pub gap: i32,
}

impl BoardLayout {
    /// Top-left corner of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        let step = self.cell + self.gap;
        (
            self.x + self.gap + col as i32 * step,
            self.y + self.gap + row as i32 * step,
        )
    }
}

/// Fit a square board below the header, centred in the window.
pub fn board_layout(screen: ScreenSize) -> BoardLayout {
    let n = SIZE as i32;
    let avail_w = (screen.w - 2 * MARGIN).max(0);
    let avail_h = (screen.h - HEADER_HEIGHT - MARGIN).max(0);
    let cell = ((avail_w.min(avail_h) - GAP * (n + 1)) / n).max(1);
    let side = cell * n + GAP * (n + 1);
    BoardLayout {
        x: ((screen.w - side) / 2).max(0),
        y: HEADER_HEIGHT + ((avail_h - side) / 2).max(0),
        side,
        cell,
        gap: GAP,
    }
}

/// Font size for a tile label; long numbers shrink to stay inside the cell.
pub fn label_font_size(value: u32, cell: i32) -> i32 {
    let base = cell * 2 / 5;
    let size = match value.to_string().len() {
        0..=2 => base,
        3 => base * 5 / 6,
        4 => base * 2 / 3,
        _ => base / 2,
    };
    size.max(8)
}

/// Width in pixels of `text` drawn with raylib's default font.
fn measure_text(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(_) => 0,
    }
}

fn draw_centered_text(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: i32,
    center_y: i32,
    font_size: i32,
    color: Color,
) {
    let width = measure_text(text, font_size);
    d.draw_text(
        text,
        center_x - width / 2,
        center_y - font_size / 2,
        font_size,
        color,
    );
}

fn draw_header(d: &mut RaylibDrawHandle, grid: &GridEngine) {
    let score = format!("Score: {}", grid.score());
    d.draw_text(&score, MARGIN, 20, HEADER_FONT_SIZE, Color::DARKGRAY);
}

fn draw_board(d: &mut RaylibDrawHandle, grid: &GridEngine, palette: &TilePalette, layout: BoardLayout) {
    d.draw_rectangle(
        layout.x,
        layout.y,
        layout.side,
        layout.side,
        Color::new(187, 173, 160, 255),
    );
    for (row, cells) in grid.rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            let (x, y) = layout.cell_origin(row, col);
            d.draw_rectangle_rounded(
                Rectangle::new(x as f32, y as f32, layout.cell as f32, layout.cell as f32),
                0.1,
                6,
                palette.tile_color(value),
            );
            if value != 0 {
                draw_centered_text(
                    d,
                    &value.to_string(),
                    x + layout.cell / 2,
                    y + layout.cell / 2,
                    label_font_size(value, layout.cell),
                    palette.text_color(),
                );
            }
        }
    }
}

fn draw_game_over(d: &mut RaylibDrawHandle, final_score: i64, palette: &TilePalette, layout: BoardLayout) {
    let mut veil = palette.background_color();
    veil.a = 200;
    d.draw_rectangle(layout.x, layout.y, layout.side, layout.side, veil);

    let center_x = layout.x + layout.side / 2;
    let center_y = layout.y + layout.side / 2;
    draw_centered_text(
        d,
        &format!("Game Over! Your score: {}", final_score),
        center_x,
        center_y - BANNER_FONT_SIZE,
        BANNER_FONT_SIZE,
        Color::BLACK,
    );
    draw_centered_text(
        d,
        "Press R to restart, Esc to quit",
        center_x,
        center_y + BANNER_FONT_SIZE,
        HINT_FONT_SIZE,
        Color::DARKGRAY,
    );
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    state: &GameStates,
    grid: &GridEngine,
    signals: &WorldSignals,
    screen: ScreenSize,
) {
    let fps = d.get_fps();
    let text = format!("DEBUG (F11) | FPS: {} | state: {:?}", fps, state);
    d.draw_text(&text, MARGIN, 4, DEBUG_FONT_SIZE, Color::BLACK);

    let text = format!(
        "moves: {} | empty: {} | max tile: {}",
        signals.get_integer("moves").unwrap_or(0),
        grid.empty_cells().len(),
        grid.max_tile()
    );
    d.draw_text(&text, MARGIN, screen.h - 14, DEBUG_FONT_SIZE, Color::BLACK);
}

/// Draw the whole frame.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    grid: Res<GridEngine>,
    palette: Res<TilePalette>,
    state: Res<GameState>,
    signals: Res<WorldSignals>,
    screen: Res<ScreenSize>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let screen = *screen;
    let layout = board_layout(screen);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(palette.background_color());

    draw_header(&mut d, &grid);
    draw_board(&mut d, &grid, &palette, layout);

    if matches!(state.get(), GameStates::GameOver) {
        let final_score = signals
            .get_integer("final_score")
            .unwrap_or(grid.final_score() as i64);
        draw_game_over(&mut d, final_score, &palette, layout);
    }

    if debug_mode.is_some() {
        draw_debug_overlay(&mut d, state.get(), &grid, &signals, screen);
    }
}
