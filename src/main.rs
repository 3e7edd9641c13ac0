use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colorful_snake::app::{self, Session};
use colorful_snake::config::{GameConfig, WINDOW_TITLE};
use log::{LevelFilter, info};
use macroquad::prelude::Conf;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "colorful_snake")]
#[command(version, about = "Fullscreen snake: arrows steer, Esc quits")]
struct Cli {
    /// JSON config file (defaults to ./snake.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for spawn point, food and body colors
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        fullscreen: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::resolve(cli.config.as_deref())?;

    let level_name = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let level = LevelFilter::from_str(level_name)
        .map_err(|_| anyhow!("unknown log level {level_name:?}"))?;
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to initialize logger")?;

    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    info!("starting {WINDOW_TITLE}");

    macroquad::Window::from_config(window_conf(), app::run(Session { config, seed }));
    Ok(())
}
