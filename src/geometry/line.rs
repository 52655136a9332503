use crate::geometry::coord::Coord;
use crate::geometry::rational::Fraction;

/// Line `a*row + b*col + c = 0` with integer coefficients
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Line {
    /// Line through two points. Coincident points give the degenerate `0 = 0` line.
    pub fn through(p: Coord, q: Coord) -> Self {
        let (px, py) = (i64::from(p.row), i64::from(p.col));
        let (qx, qy) = (i64::from(q.row), i64::from(q.col));
        Self {
            a: py - qy,
            b: qx - px,
            c: px * qy - qx * py,
        }
    }

    /// Line through `p` perpendicular to `self`
    pub fn perpendicular_through(&self, p: Coord) -> Self {
        let (px, py) = (i64::from(p.row), i64::from(p.col));
        Self {
            a: self.b,
            b: -self.a,
            c: self.a * py - self.b * px,
        }
    }

    /// Signed value of the line equation at `p`; zero iff `p` lies on the line
    #[inline]
    pub fn evaluate(&self, p: Coord) -> i64 {
        self.a * i64::from(p.row) + self.b * i64::from(p.col) + self.c
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// Exact squared distance from `p` to this line.
    ///
    /// # Panics
    /// If the line is degenerate.
    pub fn squared_distance(&self, p: Coord) -> Fraction {
        assert!(
            !self.is_degenerate(),
            "squared distance to a degenerate line {self:?}"
        );
        let v = self.evaluate(p);
        Fraction::new(v * v, self.a * self.a + self.b * self.b)
    }
}

/// Closed segment between two grid points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Coord,
    pub to: Coord,
}

impl Segment {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Exact minimum squared distance from `p` to any point of the segment.
    ///
    /// `p` projects inside the segment iff it lies strictly between the two
    /// perpendiculars through the endpoints; otherwise the nearest point is an
    /// endpoint. A zero-length segment always takes the endpoint branch.
    pub fn min_squared_distance(&self, p: Coord) -> Fraction {
        let line = Line::through(self.from, self.to);
        let at_from = line.perpendicular_through(self.from).evaluate(p);
        let at_to = line.perpendicular_through(self.to).evaluate(p);

        if at_from.signum() * at_to.signum() >= 0 {
            let nearest = p
                .squared_distance(self.from)
                .min(p.squared_distance(self.to));
            return Fraction::from(nearest);
        }
        line.squared_distance(p)
    }
}
