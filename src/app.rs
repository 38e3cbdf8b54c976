use ggez::event::EventHandler;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Rect};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{Context, GameResult};
use log::info;

use crate::game::{GameController, GameUi, InputState};
use crate::grid::{Boundary, Position, GRID_STEP};

/// Screen pixels per world unit; one grid cell is half a unit.
pub const PIXELS_PER_UNIT: f32 = 40.0;
const CELL_PX: f32 = GRID_STEP * PIXELS_PER_UNIT;

const BACKGROUND_COLOR: Color = Color::new(0.1, 0.1, 0.15, 1.0);
const GRID_COLOR: Color = Color::new(0.15, 0.15, 0.2, 1.0);
const BORDER_COLOR: Color = Color::new(0.0, 0.8, 0.3, 1.0);
const PICKUP_COLOR: Color = Color::new(1.0, 0.2, 0.2, 1.0);

/// Window size in pixels for a given playing field.
pub fn screen_size(boundary: &Boundary) -> (f32, f32) {
    (
        (boundary.top_right.x - boundary.bottom_left.x) * PIXELS_PER_UNIT,
        (boundary.top_right.y - boundary.bottom_left.y) * PIXELS_PER_UNIT,
    )
}

/// Game-over surface of the windowed build. The overlay itself is drawn from
/// the paused flag, so this collaborator only reports the transitions.
pub struct LogUi;

impl GameUi for LogUi {
    fn show_game_over(&mut self, final_length: u32) {
        info!("game over screen shown, final length {final_length}");
    }

    fn hide_game_over(&mut self) {
        info!("game over screen hidden");
    }
}

/// ggez front-end: polls the keyboard once per frame, forwards the frame
/// delta to the controller, and draws the world. World y points up, screen y
/// points down, so drawing flips the vertical axis.
pub struct App {
    controller: GameController,
}

impl App {
    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    fn to_screen(&self, position: Position) -> Point2<f32> {
        let boundary = self.controller.config().boundary;
        Point2 {
            x: (position.x - boundary.bottom_left.x) * PIXELS_PER_UNIT,
            y: (boundary.top_right.y - position.y) * PIXELS_PER_UNIT,
        }
    }

    /// Pixel rectangle of the grid cell centered on a world position.
    fn cell_rect(&self, position: Position) -> Rect {
        let center = self.to_screen(position);
        Rect::new(
            center.x - CELL_PX / 2.0,
            center.y - CELL_PX / 2.0,
            CELL_PX,
            CELL_PX,
        )
    }

    fn draw_world(&self, ctx: &mut Context, canvas: &mut graphics::Canvas) -> GameResult {
        let boundary = self.controller.config().boundary;

        // Checkerboard over the playable cells.
        for cell in boundary.interior_cells() {
            let parity = ((cell.x + cell.y) / GRID_STEP).round() as i32;
            if parity % 2 == 0 {
                canvas.draw(
                    &graphics::Mesh::new_rectangle(
                        ctx,
                        DrawMode::fill(),
                        self.cell_rect(cell),
                        GRID_COLOR,
                    )?,
                    DrawParam::default(),
                );
            }
        }

        // Boundary outline, the playable area's edge.
        let (width, height) = screen_size(&boundary);
        canvas.draw(
            &graphics::Mesh::new_rectangle(
                ctx,
                DrawMode::stroke(2.0),
                Rect::new(1.0, 1.0, width - 2.0, height - 2.0),
                BORDER_COLOR,
            )?,
            DrawParam::default(),
        );

        // Snake with a head-to-tail gradient.
        let positions = self.controller.snake().positions();
        let count = positions.len() as f32;
        for (i, pos) in positions.iter().enumerate() {
            let progress = i as f32 / count;
            let color = Color::new(0.0, 0.9 - progress * 0.5, 0.1, 1.0);
            canvas.draw(
                &graphics::Mesh::new_rectangle(
                    ctx,
                    DrawMode::fill(),
                    self.cell_rect(*pos),
                    color,
                )?,
                DrawParam::default(),
            );
        }

        if let Some(pickup) = self.controller.pickup() {
            canvas.draw(
                &graphics::Mesh::new_rectangle(
                    ctx,
                    DrawMode::fill(),
                    self.cell_rect(pickup.position()),
                    PICKUP_COLOR,
                )?,
                DrawParam::default(),
            );
        }

        let status = graphics::Text::new(format!(
            "Length: {} | High Score: {}",
            self.controller.snake().len(),
            self.controller.high_score(),
        ));
        canvas.draw(
            &status,
            DrawParam::default()
                .dest(Point2 { x: 10.0, y: 10.0 })
                .color(Color::WHITE),
        );

        Ok(())
    }

    fn draw_overlay(&self, canvas: &mut graphics::Canvas) {
        let boundary = self.controller.config().boundary;
        let (width, height) = screen_size(&boundary);

        let overlay = format!(
            "GAME OVER\nLength: {}\nHigh Score: {}\n\nSpace: new game\nEsc: resume\nQ: quit",
            self.controller.snake().len(),
            self.controller.high_score(),
        );
        let mut text = graphics::Text::new(overlay);
        let text = text.set_scale(32.0);
        canvas.draw(
            text,
            DrawParam::default()
                .dest(Point2 {
                    x: width / 2.0 - 110.0,
                    y: height / 2.0 - 120.0,
                })
                .color(Color::WHITE),
        );
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f32();
        let keyboard = &ctx.keyboard;
        let input = InputState {
            left: keyboard.is_key_pressed(KeyCode::Left) || keyboard.is_key_pressed(KeyCode::A),
            right: keyboard.is_key_pressed(KeyCode::Right) || keyboard.is_key_pressed(KeyCode::D),
            down: keyboard.is_key_pressed(KeyCode::Down) || keyboard.is_key_pressed(KeyCode::S),
            up: keyboard.is_key_pressed(KeyCode::Up) || keyboard.is_key_pressed(KeyCode::W),
        };
        self.controller.tick(dt, input);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        self.draw_world(ctx, &mut canvas)?;
        if self.controller.is_paused() {
            self.draw_overlay(&mut canvas);
        }
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            match keycode {
                KeyCode::Escape => {
                    if self.controller.is_paused() {
                        self.controller.resume();
                    } else {
                        self.controller.pause();
                    }
                }
                KeyCode::Space | KeyCode::Return if self.controller.is_paused() => {
                    self.controller.start_new_game();
                    self.controller.resume();
                }
                KeyCode::Q if self.controller.is_paused() => {
                    ctx.request_quit();
                }
                _ => {}
            }
        }
        Ok(())
    }
}
