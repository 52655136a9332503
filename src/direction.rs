/// The four axis-aligned steps, in the fixed order used to break scent ties.
///
/// Rows grow downwards, so East is `col + 1` and South is `row + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(row, col)` step for this direction
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }

    /// Quarter turn counter-clockwise, wrapping through `ALL`
    #[inline]
    pub const fn rotate_ccw(self) -> Direction {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::North => "north",
        }
    }
}
