use crate::grid::Position;

/// A collectible that extends the snake when the head reaches it.
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    position: Position,
    granted_segments: u32,
}

impl Pickup {
    /// `granted_segments` is how many tail segments consuming this pickup
    /// adds; callers guarantee it is at least 1.
    pub fn new(position: Position, granted_segments: u32) -> Self {
        Self {
            position,
            granted_segments,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn granted_segments(&self) -> u32 {
        self.granted_segments
    }
}
