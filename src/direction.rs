use crate::grid::{Position, GRID_STEP};

/// One of the four grid movement directions.
///
/// The discriminants are chosen so that opposite directions carry numerically
/// opposite codes: two directions are opposite exactly when their codes sum
/// to zero. The reversal guard in the game loop relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum Direction {
    Left = -1,
    Right = 1,
    Up = -2,
    Down = 2,
}

impl Direction {
    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.code() + other.code() == 0
    }

    /// World-unit offset of one grid step in this direction.
    pub fn step(self) -> (f32, f32) {
        match self {
            Direction::Left => (-GRID_STEP, 0.0),
            Direction::Right => (GRID_STEP, 0.0),
            Direction::Up => (0.0, GRID_STEP),
            Direction::Down => (0.0, -GRID_STEP),
        }
    }

    /// The position one grid step away from `from` in this direction.
    pub fn step_from(self, from: Position) -> Position {
        let (dx, dy) = self.step();
        from.offset(dx, dy)
    }
}
