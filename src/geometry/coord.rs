use crate::direction::Direction;
use std::fmt;

/// Grid cell as `(row, col)`; `(0, 0)` is the nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const NEST: Coord = Coord { row: 0, col: 0 };

    /// Sentinel for "no previous position"; never inside a grid
    pub const INVALID: Coord = Coord { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell one step in `direction` (may leave the grid)
    #[inline]
    pub const fn offset(self, direction: Direction) -> Coord {
        let (dr, dc) = direction.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// Exact squared euclidean distance
    #[inline]
    pub fn squared_distance(self, other: Coord) -> i64 {
        let dr = i64::from(self.row - other.row);
        let dc = i64::from(self.col - other.col);
        dr * dr + dc * dc
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
