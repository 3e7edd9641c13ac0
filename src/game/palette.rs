use macroquad::prelude::Color;
use rand::Rng;
use rand::seq::SliceRandom;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

// Background bands, top to bottom
pub const BACKGROUND_BANDS: [Color; 5] = [
    rgb(255, 183, 3),
    rgb(255, 99, 72),
    rgb(72, 219, 251),
    rgb(29, 209, 161),
    rgb(255, 234, 167),
];
pub const FOOD: Color = rgb(255, 0, 100);
pub const SNAKE_HEAD: Color = rgb(0, 200, 0);
pub const SNAKE_BODY_CHOICES: [Color; 4] = [
    rgb(0, 200, 0),
    rgb(0, 150, 0),
    rgb(0, 255, 100),
    rgb(0, 255, 200),
];
pub const SCORE_TEXT: Color = rgb(0, 0, 0);
pub const GAME_OVER_TEXT: Color = rgb(255, 0, 0);

/// Body colors picked once per run and looked up by segment index.
///
/// Lookup is by position in the snake, not by segment, so a segment's color
/// changes whenever the snake grows and indices shift.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPalette {
    colors: Vec<Color>,
}

impl BodyPalette {
    /// `len` must be non-zero; the config layer rejects zero.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let colors = (0..len.max(1))
            .map(|_| *SNAKE_BODY_CHOICES.choose(rng).unwrap_or(&SNAKE_HEAD))
            .collect();
        Self { colors }
    }

    pub fn from_colors(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() { None } else { Some(Self { colors }) }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}
