use std::path::PathBuf;

use clap::Parser;
use ggez::{event, GameError, GameResult};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod app;
mod direction;
mod game;
mod grid;
mod pickup;
mod score;
mod snake;
mod util;

use app::{App, LogUi};
use game::{GameConfig, GameController};
use grid::{Boundary, Position};
use score::JsonScoreFile;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake on a half-unit world grid")]
struct Cli {
    /// Playing field width in world units
    #[arg(long, default_value_t = 10.0)]
    width: f32,

    /// Playing field height in world units
    #[arg(long, default_value_t = 10.0)]
    height: f32,

    /// Seconds between grid moves
    #[arg(long, default_value_t = 0.25)]
    speed: f32,

    /// Segments granted per consumed pickup
    #[arg(long, default_value_t = 1)]
    grow: u32,

    /// Extra tail segments added at game start
    #[arg(long, default_value_t = 0)]
    start_tails: u32,

    /// RNG seed for reproducible pickup placement
    #[arg(long)]
    seed: Option<u64>,

    /// High score file
    #[arg(long, default_value = "high_scores.json")]
    scores: PathBuf,
}

fn main() -> GameResult {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("failed to initialize logger");

    let cli = Cli::parse();
    let config = GameConfig {
        boundary: Boundary::new(
            Position::new(-cli.width / 2.0, -cli.height / 2.0),
            Position::new(cli.width / 2.0, cli.height / 2.0),
        ),
        move_interval: cli.speed,
        spawn_position: Position::new(1.0, 0.0),
        pickup_grant: cli.grow,
        start_tails: cli.start_tails,
    };

    let ui = Box::new(LogUi);
    let scores = Box::new(JsonScoreFile::open(cli.scores));
    let controller = match cli.seed {
        Some(seed) => GameController::with_seed(config, seed, ui, scores),
        None => GameController::new(config, ui, scores),
    }
    .map_err(|e| GameError::CustomError(e.to_string()))?;

    let (width, height) = app::screen_size(&config.boundary);
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Grid Snake")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(width, height)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("grid_snake", "grid_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    event::run(ctx, event_loop, App::new(controller))
}
