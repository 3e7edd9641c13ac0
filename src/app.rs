use log::info;
use macroquad::prelude::{
    BLACK, clear_background, get_time, next_frame, prevent_quit, screen_height, screen_width,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{CELL_SIZE, GAME_OVER_HOLD_SECS, GameConfig};
use crate::game::{BodyPalette, Game, Grid};
use crate::input::ActionQueue;
use crate::render::{self, Frame};

/// Everything the loop needs, built once before the first frame.
pub struct Session {
    pub config: GameConfig,
    pub seed: u64,
}

/// One round: play until quit or collision, hold the game-over frame, return.
pub async fn run(session: Session) {
    // Window close becomes an ordinary quit action.
    prevent_quit();

    // Fullscreen size is settled after the first frame.
    next_frame().await;
    let grid = Grid::from_screen(screen_width(), screen_height(), CELL_SIZE);
    info!(
        "screen {}x{} px, grid {}x{} cells, seed {}",
        grid.width_px, grid.height_px, grid.cols, grid.rows, session.seed
    );

    let mut rng = StdRng::seed_from_u64(session.seed);
    let body = BodyPalette::generate(&mut rng, session.config.palette_len);
    let mut game = Game::new(grid, rng);
    let mut queue = ActionQueue::new();

    let tick_interval = GameConfig::tick_interval_secs();
    let mut last_tick = get_time();
    let mut last_running = render::compose(game.state(), &grid, &body);

    loop {
        queue.poll_keyboard();

        let now = get_time();
        if now - last_tick >= tick_interval {
            last_tick = now;
            game.tick(queue.drain());
        }

        let frame = render::compose(game.state(), &grid, &body);
        if let Some(reason) = game.state().game_over_reason() {
            info!("game over ({reason:?}), score {}", game.state().score);
            hold_game_over(&last_running, &frame, GAME_OVER_HOLD_SECS).await;
            return;
        }

        clear_background(BLACK);
        render::present(&frame);
        last_running = frame;
        next_frame().await;
    }
}

/// Keep the game-over label up over the last playing frame for `secs`.
async fn hold_game_over(last_running: &Frame, game_over: &Frame, secs: f64) {
    let started = get_time();
    while get_time() - started < secs {
        clear_background(BLACK);
        render::present(last_running);
        render::present(game_over);
        next_frame().await;
    }
}
