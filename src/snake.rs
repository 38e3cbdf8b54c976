use std::mem;

use crate::grid::Position;

/// One grid-cell-sized unit of the snake's body. Each segment exclusively
/// owns its successor; the chain is strictly linear.
#[derive(Debug)]
pub struct Segment {
    position: Position,
    next: Option<Box<Segment>>,
}

impl Segment {
    fn new(position: Position) -> Self {
        Self {
            position,
            next: None,
        }
    }
}

/// The snake body: an ordered chain of segments, head first.
///
/// Movement works by position propagation: the head takes the incoming
/// position and every other segment takes the position its predecessor held
/// before the move, so the whole chain shifts one cell while keeping its
/// shape. The traversals are iterative, so chain length never threatens the
/// stack.
#[derive(Debug)]
pub struct Snake {
    head: Segment,
}

impl Snake {
    /// A snake of length 1 at the given spawn position.
    pub fn new(spawn: Position) -> Self {
        Self {
            head: Segment::new(spawn),
        }
    }

    /// Builds a chain from explicit positions: the head plus the remaining
    /// segments in head-to-tail order.
    pub fn from_positions(head: Position, rest: &[Position]) -> Self {
        let mut tail = None;
        for &pos in rest.iter().rev() {
            tail = Some(Box::new(Segment {
                position: pos,
                next: tail,
            }));
        }
        Self {
            head: Segment {
                position: head,
                next: tail,
            },
        }
    }

    /// Shifts the whole chain one slot toward the new head position. Each
    /// segment hands its old position to its successor; the tail's old
    /// position is discarded.
    pub fn move_to(&mut self, new_head: Position) {
        let mut incoming = new_head;
        let mut segment = Some(&mut self.head);
        while let Some(seg) = segment {
            mem::swap(&mut seg.position, &mut incoming);
            segment = seg.next.as_deref_mut();
        }
    }

    /// Appends one segment at the current tail position and returns that
    /// position. Must not be interleaved with a move.
    pub fn add_tail(&mut self) -> Position {
        let mut seg = &mut self.head;
        while seg.next.is_some() {
            seg = seg.next.as_mut().unwrap();
        }
        let position = seg.position;
        seg.next = Some(Box::new(Segment::new(position)));
        position
    }

    /// All occupied positions, head to tail.
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::new();
        let mut segment = Some(&self.head);
        while let Some(seg) = segment {
            out.push(seg.position);
            segment = seg.next.as_deref();
        }
        out
    }

    /// Segment count, at least 1.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut segment = Some(&self.head);
        while let Some(seg) = segment {
            count += 1;
            segment = seg.next.as_deref();
        }
        count
    }

    pub fn head_position(&self) -> Position {
        self.head.position
    }
}

// The default recursive drop of a Box chain would recurse once per segment.
impl Drop for Snake {
    fn drop(&mut self) {
        let mut next = self.head.next.take();
        while let Some(mut seg) = next {
            next = seg.next.take();
        }
    }
}
