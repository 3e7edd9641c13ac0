use macroquad::prelude::{KeyCode, is_key_pressed, is_quit_requested};

use crate::game::{Action, Direction};

/// Keys checked each frame, in the order their presses are queued.
const WATCHED_KEYS: [KeyCode; 5] = [
    KeyCode::Escape,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
];

pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::from(Direction::Up)),
        KeyCode::Down => Some(Action::from(Direction::Down)),
        KeyCode::Left => Some(Action::from(Direction::Left)),
        KeyCode::Right => Some(Action::from(Direction::Right)),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Buffers presses between simulation ticks.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes everything queued so far, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Action> {
        self.pending.drain(..)
    }

    /// Queue this frame's key presses and any window-close request.
    /// Needs `prevent_quit()` to have been called for close to reach us.
    ///
    /// macroquad only reports which keys went down this frame, not in what
    /// order, so presses within one frame are queued in `WATCHED_KEYS` order.
    /// Ordering across frames is preserved.
    pub fn poll_keyboard(&mut self) {
        for key in WATCHED_KEYS {
            if is_key_pressed(key) {
                if let Some(action) = action_for_key(key) {
                    self.push(action);
                }
            }
        }
        if is_quit_requested() {
            self.push(Action::Quit);
        }
    }
}
