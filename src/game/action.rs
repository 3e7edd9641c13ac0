use super::cell::Direction;

/// A player intent, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    /// Escape or window close.
    Quit,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Turn(direction)
    }
}
