use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Heading of a probe on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Clockwise order: stepping forward in this array turns right, backward turns left.
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    fn position(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// One step counter-clockwise.
    pub fn left(self) -> Self {
        CLOCKWISE[(self.position() + CLOCKWISE.len() - 1) % CLOCKWISE.len()]
    }

    /// One step clockwise.
    pub fn right(self) -> Self {
        CLOCKWISE[(self.position() + 1) % CLOCKWISE.len()]
    }

    /// Unit step (dx, dy) taken when moving forward with this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[test]
    fn test_left_cycle() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.left(), Direction::South);
        assert_eq!(Direction::South.left(), Direction::East);
        assert_eq!(Direction::East.left(), Direction::North);
    }

    #[test]
    fn test_right_cycle() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::East.right(), Direction::South);
        assert_eq!(Direction::South.right(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
    }

    #[test]
    fn test_four_turns_restore_heading() {
        for d in ALL {
            assert_eq!(d.left().left().left().left(), d);
            assert_eq!(d.right().right().right().right(), d);
        }
    }

    #[test]
    fn test_left_then_right_is_identity() {
        for d in ALL {
            assert_eq!(d.left().right(), d);
            assert_eq!(d.right().left(), d);
        }
    }

    #[test]
    fn test_serialises_uppercase() {
        let json = serde_json::to_string(&Direction::North).unwrap();
        assert_eq!(json, "\"NORTH\"");
        let parsed: Direction = serde_json::from_str("\"WEST\"").unwrap();
        assert_eq!(parsed, Direction::West);
    }
}
