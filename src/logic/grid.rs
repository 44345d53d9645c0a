use std::collections::HashSet;

use crate::models::Point;

/// Bounded rectangle of cells with a fixed set of obstacles.
///
/// Obstacles are not checked against the bounds: one placed outside the grid is
/// simply unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: HashSet<Point>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: HashSet::new(),
        }
    }

    /// Builder-style variant of [`Grid::add_obstacle`] for setup code.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Point>) -> Self {
        for p in obstacles {
            self.add_obstacle(p.x, p.y);
        }
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        self.obstacles.insert(Point::new(x, y));
    }

    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.obstacles.contains(&Point::new(x, y))
    }

    /// True when a probe may stand on (x, y).
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.is_within_bounds(x, y) && !self.is_obstacle(x, y)
    }

    /// Obstacles sorted by (x, y).
    pub fn obstacles(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.obstacles.iter().copied().collect();
        points.sort();
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_half_open() {
        let grid = Grid::new(5, 3);
        assert!(grid.is_within_bounds(0, 0));
        assert!(grid.is_within_bounds(4, 2));
        assert!(!grid.is_within_bounds(5, 0));
        assert!(!grid.is_within_bounds(0, 3));
        assert!(!grid.is_within_bounds(-1, 0));
        assert!(!grid.is_within_bounds(0, -1));
    }

    #[test]
    fn test_add_obstacle_is_idempotent() {
        let mut grid = Grid::new(5, 5);
        grid.add_obstacle(2, 2);
        grid.add_obstacle(2, 2);
        assert!(grid.is_obstacle(2, 2));
        assert_eq!(grid.obstacles(), vec![Point::new(2, 2)]);
    }

    #[test]
    fn test_obstacle_outside_bounds_is_accepted() {
        let mut grid = Grid::new(5, 5);
        grid.add_obstacle(10, -3);
        assert!(grid.is_obstacle(10, -3));
        assert!(!grid.is_free(10, -3));
    }

    #[test]
    fn test_is_free() {
        let grid = Grid::new(3, 3).with_obstacles([Point::new(1, 1)]);
        assert!(grid.is_free(0, 0));
        assert!(!grid.is_free(1, 1));
        assert!(!grid.is_free(3, 0));
    }

    #[test]
    fn test_obstacles_sorted() {
        let grid = Grid::new(5, 5).with_obstacles([
            Point::new(3, 1),
            Point::new(0, 4),
            Point::new(3, 0),
        ]);
        assert_eq!(
            grid.obstacles(),
            vec![Point::new(0, 4), Point::new(3, 0), Point::new(3, 1)]
        );
    }
}
