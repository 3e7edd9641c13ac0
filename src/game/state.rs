use super::cell::{Cell, Direction};

/// Snake body, head at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments. Returns `None` for an empty body
    /// or one that overlaps itself.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let overlapping = cells
            .iter()
            .enumerate()
            .any(|(i, c)| cells[..i].contains(c));
        if overlapping {
            return None;
        }
        Some(Self { body: cells })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
    }

    pub(crate) fn drop_tail(&mut self) {
        // Never leave the snake headless.
        if self.body.len() > 1 {
            self.body.pop();
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameOverReason {
    Quit,
    Wall,
    SelfCollision,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(GameOverReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, direction: Direction, food: Cell) -> Self {
        Self {
            snake,
            direction,
            food,
            score: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            Phase::Running => None,
            Phase::GameOver(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_overlapping_bodies() {
        assert!(Snake::from_cells(vec![]).is_none());
        let dup = vec![Cell::new(0, 0), Cell::new(32, 0), Cell::new(0, 0)];
        assert!(Snake::from_cells(dup).is_none());
    }

    #[test]
    fn head_and_tail_edits() {
        let mut snake = Snake::from_cells(vec![Cell::new(64, 0), Cell::new(32, 0)]).unwrap();
        snake.push_head(Cell::new(96, 0));
        assert_eq!(snake.head(), Cell::new(96, 0));
        assert_eq!(snake.len(), 3);
        snake.drop_tail();
        assert_eq!(snake.cells(), &[Cell::new(96, 0), Cell::new(64, 0)]);
    }

    #[test]
    fn single_segment_keeps_its_head() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn fresh_state_is_running() {
        let state = GameState::new(Snake::new(Cell::new(0, 0)), Direction::Right, Cell::new(32, 32));
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.game_over_reason(), None);
    }
}
