//! Colorful Snake: a fullscreen single-player snake game on macroquad.
//!
//! - `game`: the rules, free of window and input handling
//! - `input`: keyboard polling into an ordered action queue
//! - `render`: draw-command composition and presentation
//! - `app`: the fixed-rate loop tying them together

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
