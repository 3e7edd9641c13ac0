use log::debug;
use rand::Rng;

use super::action::Action;
use super::cell::{Cell, Direction, Grid};
use super::state::{GameOverReason, GameState, Phase, Snake};

/// What a single update did to the state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameOverReason),
    /// The round was already over; nothing changed.
    Idle,
}

pub struct Game<R: Rng> {
    grid: Grid,
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a round: one-cell snake and food both at random cells, heading right.
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let head = grid.random_cell(&mut rng);
        let food = grid.random_cell(&mut rng);
        let state = GameState::new(Snake::new(head), Direction::Right, food);
        Self { grid, state, rng }
    }

    pub fn with_state(grid: Grid, state: GameState, rng: R) -> Self {
        Self { grid, state, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Input phase then update phase.
    pub fn tick<I>(&mut self, actions: I) -> TickOutcome
    where
        I: IntoIterator<Item = Action>,
    {
        self.apply_actions(actions);
        self.step()
    }

    /// Fold a batch of actions in arrival order. Every action is consumed, but
    /// once the round is over none of them change anything.
    pub fn apply_actions<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            if !self.state.is_running() {
                continue;
            }
            match action {
                Action::Turn(direction) => {
                    if !direction.is_reverse_of(self.state.direction) {
                        self.state.direction = direction;
                    }
                }
                Action::Quit => {
                    self.state.phase = Phase::GameOver(GameOverReason::Quit);
                }
            }
        }
    }

    pub fn step(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }

        let new_head = self
            .state
            .snake
            .head()
            .stepped(self.state.direction, self.grid.cell_size);

        if let Some(reason) = self.collision(new_head) {
            self.state.phase = Phase::GameOver(reason);
            return TickOutcome::GameOver(reason);
        }

        self.state.snake.push_head(new_head);

        let grow = new_head == self.state.food;
        if grow {
            self.state.score += 1;
            // Not re-rolled against the body: food may land under the snake.
            self.state.food = self.grid.random_cell(&mut self.rng);
            debug!(
                "food eaten, score {} length {}, next food at ({}, {})",
                self.state.score,
                self.state.snake.len(),
                self.state.food.x,
                self.state.food.y
            );
        } else {
            self.state.snake.drop_tail();
        }

        if grow { TickOutcome::Ate } else { TickOutcome::Moved }
    }

    fn collision(&self, new_head: Cell) -> Option<GameOverReason> {
        if !self.grid.contains(new_head) {
            return Some(GameOverReason::Wall);
        }
        if self.state.snake.occupies(new_head) {
            return Some(GameOverReason::SelfCollision);
        }
        None
    }
}
