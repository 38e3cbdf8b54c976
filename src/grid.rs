use rand::Rng;

/// Movement quantum of the world grid, in world units.
pub const GRID_STEP: f32 = 0.5;

/// A point on the half-unit world grid.
///
/// Equality is exact. All positions produced by movement and spawning are
/// multiples of [`GRID_STEP`], which are exactly representable in `f32`, so
/// no tolerance is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given world-unit deltas.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snaps a coordinate onto the grid by dropping the remainder toward zero,
/// i.e. `v - v % GRID_STEP`.
pub fn snap_to_grid(v: f32) -> f32 {
    v - v % GRID_STEP
}

/// Axis-aligned open rectangle limiting legal positions. A position is in
/// bounds only if it lies strictly between the corners on both axes.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    pub bottom_left: Position,
    pub top_right: Position,
}

impl Boundary {
    pub fn new(bottom_left: Position, top_right: Position) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x > self.bottom_left.x
            && position.x < self.top_right.x
            && position.y > self.bottom_left.y
            && position.y < self.top_right.y
    }

    /// Checks that a candidate position is strictly inside the boundary and
    /// not already taken. Linear scan over the occupied set.
    pub fn is_position_allowed(&self, position: Position, occupied: &[Position]) -> bool {
        self.contains(position) && !occupied.contains(&position)
    }

    /// Picks a uniformly random point inside the rectangle and snaps it onto
    /// the grid. Does not check occupancy; callers retry against
    /// [`Boundary::is_position_allowed`] as needed.
    pub fn random_position(&self, rng: &mut impl Rng) -> Position {
        let x = rng.gen_range(self.bottom_left.x..self.top_right.x);
        let y = rng.gen_range(self.bottom_left.y..self.top_right.y);
        Position::new(snap_to_grid(x), snap_to_grid(y))
    }

    /// All grid cells strictly inside the boundary, row by row. Used as the
    /// deterministic fallback when random pickup placement keeps colliding.
    pub fn interior_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        let mut y = snap_to_grid(self.bottom_left.y) + GRID_STEP;
        while y < self.top_right.y {
            let mut x = snap_to_grid(self.bottom_left.x) + GRID_STEP;
            while x < self.top_right.x {
                let cell = Position::new(x, y);
                if self.contains(cell) {
                    cells.push(cell);
                }
                x += GRID_STEP;
            }
            y += GRID_STEP;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snap_rounds_down_to_half_units() {
        assert_eq!(snap_to_grid(1.3), 1.0);
        assert_eq!(snap_to_grid(1.7), 1.5);
        assert_eq!(snap_to_grid(2.0), 2.0);
        assert_eq!(snap_to_grid(0.49), 0.0);
    }

    #[test]
    fn boundary_is_open_on_both_axes() {
        let boundary = Boundary::new(Position::new(0.0, 0.0), Position::new(5.0, 5.0));
        assert!(boundary.contains(Position::new(0.5, 0.5)));
        assert!(boundary.contains(Position::new(4.5, 4.5)));
        assert!(!boundary.contains(Position::new(0.0, 2.0)));
        assert!(!boundary.contains(Position::new(5.0, 2.0)));
        assert!(!boundary.contains(Position::new(2.0, 0.0)));
        assert!(!boundary.contains(Position::new(2.0, 5.0)));
    }

    #[test]
    fn occupied_cells_are_disallowed() {
        let boundary = Boundary::new(Position::new(0.0, 0.0), Position::new(5.0, 5.0));
        let occupied = [Position::new(1.0, 1.0), Position::new(1.5, 1.0)];
        assert!(!boundary.is_position_allowed(Position::new(1.0, 1.0), &occupied));
        assert!(!boundary.is_position_allowed(Position::new(1.5, 1.0), &occupied));
        assert!(boundary.is_position_allowed(Position::new(2.0, 1.0), &occupied));
        assert!(!boundary.is_position_allowed(Position::new(5.5, 1.0), &[]));
    }

    #[test]
    fn random_positions_are_snapped_and_inside_the_rectangle() {
        let boundary = Boundary::new(Position::new(-2.0, -2.0), Position::new(3.0, 3.0));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = boundary.random_position(&mut rng);
            assert_eq!(pos.x % GRID_STEP, 0.0);
            assert_eq!(pos.y % GRID_STEP, 0.0);
            assert!(pos.x >= boundary.bottom_left.x && pos.x < boundary.top_right.x);
            assert!(pos.y >= boundary.bottom_left.y && pos.y < boundary.top_right.y);
        }
    }

    #[test]
    fn interior_cells_cover_the_open_rectangle() {
        let boundary = Boundary::new(Position::new(0.0, 0.0), Position::new(2.0, 1.0));
        let cells = boundary.interior_cells();
        // x in {0.5, 1.0, 1.5}, y in {0.5}
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| boundary.contains(*c)));
    }
}
