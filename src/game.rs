use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::direction::Direction;
use crate::grid::{Boundary, Position};
use crate::pickup::Pickup;
use crate::snake::Snake;
use crate::util;

/// Random draws tried for a pickup position before falling back to a
/// deterministic scan of the grid.
const MAX_RANDOM_SPAWN_ATTEMPTS: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("boundary corners are inverted: bottom-left must be strictly below and left of top-right")]
    InvertedBoundary,
    #[error("move interval must be positive, got {0}")]
    NonPositiveInterval(f32),
    #[error("pickup must grant at least one segment")]
    ZeroPickupGrant,
    #[error("spawn position {0:?} is outside the boundary")]
    SpawnOutOfBounds(Position),
}

/// Session parameters, validated once at start.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub boundary: Boundary,
    /// Seconds between grid moves.
    pub move_interval: f32,
    pub spawn_position: Position,
    /// Segments granted per consumed pickup.
    pub pickup_grant: u32,
    /// Extra tails added right at game start.
    pub start_tails: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boundary: Boundary::new(Position::new(-5.0, -5.0), Position::new(5.0, 5.0)),
            move_interval: 0.25,
            spawn_position: Position::new(1.0, 0.0),
            pickup_grant: 1,
            start_tails: 0,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundary.bottom_left.x >= self.boundary.top_right.x
            || self.boundary.bottom_left.y >= self.boundary.top_right.y
        {
            return Err(ConfigError::InvertedBoundary);
        }
        if self.move_interval <= 0.0 {
            return Err(ConfigError::NonPositiveInterval(self.move_interval));
        }
        if self.pickup_grant == 0 {
            return Err(ConfigError::ZeroPickupGrant);
        }
        if !self.boundary.contains(self.spawn_position) {
            return Err(ConfigError::SpawnOutOfBounds(self.spawn_position));
        }
        Ok(())
    }
}

/// The four directional input signals, polled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
}

impl InputState {
    pub fn pressed(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
            Direction::Down => input.down = true,
            Direction::Up => input.up = true,
        }
        input
    }
}

/// Game-over surface. The controller announces the final length on loss (or
/// on a saturated-grid win); the host hides the surface again when the
/// session resumes.
pub trait GameUi {
    fn show_game_over(&mut self, final_length: u32);
    fn hide_game_over(&mut self);
}

/// Persistent best-length storage, read and written on game end only.
pub trait ScoreStore {
    fn high_score(&self) -> u32;
    fn set_high_score(&mut self, score: u32);
}

/// Owns the session state and drives the snake once per tick.
///
/// Two states: running and paused. Paused doubles as the menu and game-over
/// state; all per-tick logic short-circuits while it is set. Sessions start
/// paused until the host resumes them.
pub struct GameController {
    config: GameConfig,
    snake: Snake,
    pickup: Option<Pickup>,
    current_direction: Direction,
    last_direction: Direction,
    time_until_next_move: f32,
    paused: bool,
    rng: StdRng,
    ui: Box<dyn GameUi>,
    scores: Box<dyn ScoreStore>,
}

impl GameController {
    pub fn new(
        config: GameConfig,
        ui: Box<dyn GameUi>,
        scores: Box<dyn ScoreStore>,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy(), ui, scores)
    }

    /// Seeded constructor for reproducible sessions.
    pub fn with_seed(
        config: GameConfig,
        seed: u64,
        ui: Box<dyn GameUi>,
        scores: Box<dyn ScoreStore>,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed), ui, scores)
    }

    fn with_rng(
        config: GameConfig,
        rng: StdRng,
        ui: Box<dyn GameUi>,
        scores: Box<dyn ScoreStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self {
            config,
            snake: Snake::new(config.spawn_position),
            pickup: None,
            current_direction: Direction::Right,
            last_direction: Direction::Right,
            time_until_next_move: config.move_interval,
            paused: true,
            rng,
            ui,
            scores,
        };
        controller.start_new_game();
        Ok(controller)
    }

    /// Discards the old snake and pickup and sets up a fresh game. The
    /// session keeps its current paused/running state; hosts resume
    /// explicitly.
    pub fn start_new_game(&mut self) {
        self.snake = Snake::new(self.config.spawn_position);
        let snake = &mut self.snake;
        util::repeat(self.config.start_tails, || {
            snake.add_tail();
        });
        self.current_direction = Direction::Right;
        self.last_direction = Direction::Right;
        self.time_until_next_move = self.config.move_interval;
        self.spawn_pickup();
    }

    /// Advances the session by `dt` seconds. At most one grid move happens
    /// per tick; the pickup check runs in the same tick, after the move.
    pub fn tick(&mut self, dt: f32, input: InputState) {
        if self.paused {
            return;
        }

        // Last pressed signal wins, in this fixed evaluation order.
        let mut wanted = self.current_direction;
        if input.left {
            wanted = Direction::Left;
        }
        if input.right {
            wanted = Direction::Right;
        }
        if input.down {
            wanted = Direction::Down;
        }
        if input.up {
            wanted = Direction::Up;
        }

        // With a body behind the head, turning straight back would mean
        // instant death; ignore the reversal and keep going.
        if self.snake.len() > 1 {
            if wanted.is_opposite(self.last_direction) {
                self.current_direction = self.last_direction;
            } else {
                self.current_direction = wanted;
            }
        } else {
            self.current_direction = wanted;
        }

        self.time_until_next_move -= dt;
        if self.time_until_next_move > 0.0 {
            return;
        }
        self.time_until_next_move = self.config.move_interval;

        self.move_in(self.current_direction, false);

        if let Some(pickup) = self.pickup {
            if self.snake.head_position() == pickup.position() {
                let snake = &mut self.snake;
                util::repeat(pickup.granted_segments(), || {
                    snake.add_tail();
                });
                self.spawn_pickup();
            }
        }

        self.last_direction = self.current_direction;
    }

    /// Attempts one grid step. An illegal candidate (outside the boundary or
    /// on any occupied cell, the about-to-vacate tail included) loses the
    /// game instead of moving.
    pub fn move_in(&mut self, direction: Direction, force: bool) {
        let candidate = direction.step_from(self.snake.head_position());
        let occupied = self.snake.positions();
        if force || self.config.boundary.is_position_allowed(candidate, &occupied) {
            self.snake.move_to(candidate);
        } else {
            self.lose_game();
        }
    }

    pub fn move_up(&mut self, force: bool) {
        self.move_in(Direction::Up, force);
    }

    pub fn move_down(&mut self, force: bool) {
        self.move_in(Direction::Down, force);
    }

    pub fn move_left(&mut self, force: bool) {
        self.move_in(Direction::Left, force);
    }

    pub fn move_right(&mut self, force: bool) {
        self.move_in(Direction::Right, force);
    }

    fn spawn_pickup(&mut self) {
        match self.find_pickup_position() {
            Some(position) => {
                self.pickup = Some(Pickup::new(position, self.config.pickup_grant));
            }
            None => self.win_game(),
        }
    }

    /// Legality search for a fresh pickup cell: bounded random draws, then a
    /// deterministic sweep. `None` means the grid is saturated.
    fn find_pickup_position(&mut self) -> Option<Position> {
        let occupied = self.snake.positions();
        for _ in 0..MAX_RANDOM_SPAWN_ATTEMPTS {
            let candidate = self.config.boundary.random_position(&mut self.rng);
            if self
                .config
                .boundary
                .is_position_allowed(candidate, &occupied)
            {
                return Some(candidate);
            }
        }
        self.config
            .boundary
            .interior_cells()
            .into_iter()
            .find(|cell| !occupied.contains(cell))
    }

    pub fn lose_game(&mut self) {
        info!("illegal move at length {}, game over", self.snake.len());
        self.finish_game();
    }

    fn win_game(&mut self) {
        warn!("grid saturated, no free cell left for a pickup; game won");
        self.pickup = None;
        self.finish_game();
    }

    fn finish_game(&mut self) {
        self.paused = true;
        let length = self.snake.len() as u32;
        if length > self.scores.high_score() {
            info!("new high score: {length}");
            self.scores.set_high_score(length);
        }
        self.ui.show_game_over(length);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.ui.hide_game_over();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn pickup(&self) -> Option<&Pickup> {
        self.pickup.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }
}
