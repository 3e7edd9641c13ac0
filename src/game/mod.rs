//! Game rules: movement, growth and collisions on a pixel-aligned grid.
//!
//! Nothing in here touches the window; macroquad is only used for its
//! `Color` and `Rect` value types.

pub mod action;
pub mod cell;
pub mod engine;
pub mod palette;
pub mod state;

pub use action::Action;
pub use cell::{Cell, Direction, Grid};
pub use engine::{Game, TickOutcome};
pub use palette::BodyPalette;
pub use state::{GameOverReason, GameState, Phase, Snake};
