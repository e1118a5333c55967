use std::collections::VecDeque;

use crate::vec2::Vec2;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Up => Vec2::new(0, -1),
            Down => Vec2::new(0, 1),
            Left => Vec2::new(-1, 0),
            Right => Vec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Snake body, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Vec2>,
    direction: Direction,
}

impl Snake {
    pub fn new<I: IntoIterator<Item = Vec2>>(body: I, direction: Direction) -> Self {
        let body: VecDeque<Vec2> = body.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Snake { body, direction }
    }

    pub fn body(&self) -> &VecDeque<Vec2> {
        &self.body
    }

    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Vec2) -> bool {
        self.body.contains(&pos)
    }

    pub fn next_head(&self) -> Vec2 {
        self.head() + self.direction.delta()
    }

    /// Moves every cell one step toward the head and puts the head on
    /// `new_head`. Returns the cell that was dropped off the tail.
    pub fn advance(&mut self, new_head: Vec2) -> Vec2 {
        let old_tail = self.body.pop_back().expect("snake body is never empty");
        self.body.push_front(new_head);
        old_tail
    }

    pub fn grow(&mut self, tail: Vec2) {
        self.body.push_back(tail);
    }

    /// Returns false when the request is a straight reversal, which is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
