//! Turns a `GameState` into draw commands, then draws them with macroquad.
//!
//! `compose` is pure so the frame contents can be checked without a window;
//! `present` is the only part that talks to the GPU.

use macroquad::prelude::*;

use crate::game::palette::{self, BACKGROUND_BANDS};
use crate::game::{BodyPalette, GameState, Grid};

pub const SNAKE_CORNER_RADIUS: f32 = 8.0;
pub const LABEL_FONT_SIZE: u16 = 36;
pub const SCORE_POSITION: (f32, f32) = (20.0, 20.0);
pub const GAME_OVER_TEXT: &str = "Game Over!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// `(x, y)` is the top-left corner of the text.
    TopLeft,
    /// Text is centered on the screen; the position is ignored.
    ScreenCenter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Horizontal color bands filling the whole grid area.
    Background { width: f32, height: f32 },
    Tile {
        rect: Rect,
        color: Color,
        corner_radius: f32,
    },
    Label {
        text: String,
        x: f32,
        y: f32,
        font_size: u16,
        color: Color,
        anchor: Anchor,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub score: u32,
}

pub fn compose(state: &GameState, grid: &Grid, body: &BodyPalette) -> Frame {
    if !state.is_running() {
        return Frame {
            commands: vec![DrawCommand::Label {
                text: GAME_OVER_TEXT.to_owned(),
                x: 0.0,
                y: 0.0,
                font_size: LABEL_FONT_SIZE,
                color: palette::GAME_OVER_TEXT,
                anchor: Anchor::ScreenCenter,
            }],
            score: state.score,
        };
    }

    let cells = state.snake.cells();
    let mut commands = Vec::with_capacity(cells.len() + 3);
    commands.push(DrawCommand::Background {
        width: grid.width_px as f32,
        height: grid.height_px as f32,
    });
    commands.push(DrawCommand::Tile {
        rect: state.food.to_rect(grid.cell_size),
        color: palette::FOOD,
        corner_radius: 0.0,
    });
    for (i, cell) in cells.iter().enumerate() {
        let color = if i == 0 { palette::SNAKE_HEAD } else { body.color_at(i) };
        commands.push(DrawCommand::Tile {
            rect: cell.to_rect(grid.cell_size),
            color,
            corner_radius: SNAKE_CORNER_RADIUS,
        });
    }
    commands.push(DrawCommand::Label {
        text: format!("Score: {}", state.score),
        x: SCORE_POSITION.0,
        y: SCORE_POSITION.1,
        font_size: LABEL_FONT_SIZE,
        color: palette::SCORE_TEXT,
        anchor: Anchor::TopLeft,
    });

    Frame {
        commands,
        score: state.score,
    }
}

/// Row ranges `[start, end)` of each background band; row `y` belongs to
/// band `y * bands / height`.
pub fn background_spans(height: i32) -> Vec<(i32, i32, Color)> {
    let bands = BACKGROUND_BANDS.len() as i32;
    let height = height.max(0);
    let first_row = |band: i32| (band * height + bands - 1) / bands;
    (0..bands)
        .map(|band| (first_row(band), first_row(band + 1), BACKGROUND_BANDS[band as usize]))
        .filter(|(start, end, _)| end > start)
        .collect()
}

pub fn present(frame: &Frame) {
    for command in &frame.commands {
        match command {
            DrawCommand::Background { width, height } => {
                for (start, end, color) in background_spans(*height as i32) {
                    draw_rectangle(0.0, start as f32, *width, (end - start) as f32, color);
                }
            }
            DrawCommand::Tile {
                rect,
                color,
                corner_radius,
            } => draw_rounded_rect(*rect, *corner_radius, *color),
            DrawCommand::Label {
                text,
                x,
                y,
                font_size,
                color,
                anchor,
            } => {
                let dims = measure_text(text, None, *font_size, 1.0);
                let (left, top) = match anchor {
                    Anchor::TopLeft => (*x, *y),
                    Anchor::ScreenCenter => (
                        (screen_width() - dims.width) * 0.5,
                        (screen_height() - dims.height) * 0.5,
                    ),
                };
                // draw_text takes the baseline, not the top edge
                draw_text(text, left, top + dims.offset_y, *font_size as f32, *color);
            }
        }
    }
}

fn draw_rounded_rect(rect: Rect, radius: f32, color: Color) {
    let r = radius.min(rect.w * 0.5).min(rect.h * 0.5);
    if r <= 0.0 {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        return;
    }
    draw_rectangle(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h, color);
    draw_rectangle(rect.x, rect.y + r, r, rect.h - 2.0 * r, color);
    draw_rectangle(rect.x + rect.w - r, rect.y + r, r, rect.h - 2.0 * r, color);
    for (cx, cy) in [
        (rect.x + r, rect.y + r),
        (rect.x + rect.w - r, rect.y + r),
        (rect.x + r, rect.y + rect.h - r),
        (rect.x + rect.w - r, rect.y + rect.h - r),
    ] {
        draw_circle(cx, cy, r, color);
    }
}
