use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct CellTypeId;
}

/// Grid coordinate. Ordering is row-major (`y` first), which is the scan order used by
/// `locate` and by every deterministic tie-break in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Neighbour expansion order shared by every search in the crate.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

pub fn neighbors(p: Pos) -> [Pos; 4] {
    Direction::ALL.map(|direction| p.step(direction))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("line from ({x0},{y0}) to ({x1},{y1}) is not horizontal or vertical")]
    InvalidGeometry { x0: i32, y0: i32, x1: i32, y1: i32 },

    #[error("map of {width}x{height} is smaller than the {min}x{min} minimum")]
    MapTooSmall { width: usize, height: usize, min: usize },

    #[error("start ({x},{y}) is outside the carvable interior")]
    StartOutOfBounds { x: i32, y: i32 },

    #[error("unknown cell type `{0}`")]
    UnknownCellType(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_sort_row_major() {
        let mut positions = vec![Pos::new(3, 1), Pos::new(0, 2), Pos::new(1, 1)];
        positions.sort();
        assert_eq!(positions, vec![Pos::new(1, 1), Pos::new(3, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn neighbors_follow_north_east_south_west_order() {
        let origin = Pos::new(5, 5);
        assert_eq!(
            neighbors(origin),
            [Pos::new(5, 4), Pos::new(6, 5), Pos::new(5, 6), Pos::new(4, 5)]
        );
    }

    #[test]
    fn error_messages_name_the_offending_input() {
        let err = GridError::InvalidGeometry { x0: 1, y0: 1, x1: 3, y1: 4 };
        assert_eq!(err.to_string(), "line from (1,1) to (3,4) is not horizontal or vertical");
        assert_eq!(GridError::UnknownCellType("lava".into()).to_string(), "unknown cell type `lava`");
    }
}
