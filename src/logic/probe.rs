use std::collections::BTreeSet;

use crate::logic::grid::Grid;
use crate::models::{Direction, Point};

/// A probe standing on a borrowed [`Grid`].
///
/// Moves are checked against the grid's bounds and obstacles; a refused move is
/// reported through the `false` return value and leaves the probe untouched.
#[derive(Debug, Clone)]
pub struct Probe<'g> {
    x: i32,
    y: i32,
    direction: Direction,
    grid: &'g Grid,
    visited: BTreeSet<Point>,
}

impl<'g> Probe<'g> {
    pub fn new(x: i32, y: i32, direction: Direction, grid: &'g Grid) -> Self {
        Self {
            x,
            y,
            direction,
            grid,
            visited: BTreeSet::from([Point::new(x, y)]),
        }
    }

    pub fn move_forward(&mut self) -> bool {
        self.step(1)
    }

    pub fn move_backward(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, sign: i32) -> bool {
        let (dx, dy) = self.direction.delta();
        let (Some(nx), Some(ny)) = (self.x.checked_add(sign * dx), self.y.checked_add(sign * dy))
        else {
            return false;
        };
        if !self.grid.is_free(nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        self.visited.insert(Point::new(nx, ny));
        true
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.right();
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Snapshot of every cell occupied so far, start included.
    pub fn visited(&self) -> BTreeSet<Point> {
        self.visited.clone()
    }
}
