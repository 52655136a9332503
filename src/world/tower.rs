use crate::ant::Ant;
use crate::geometry::{Coord, Fraction, Segment};

/// Squared half-width of a beam: anything within 1/2 of the firing line is hit
#[inline]
pub fn beam_reach() -> Fraction {
    Fraction::new(1, 4)
}

/// Stationary emplacement; only ever reads ant positions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tower {
    pub pos: Coord,
}

impl Tower {
    #[inline]
    pub const fn new(pos: Coord) -> Self {
        Self { pos }
    }

    /// Index of the ant this tower fires at, if any is within `range`.
    ///
    /// The cake carrier wins outright; otherwise the nearest ant, with ties
    /// going to the earlier ant in `ants`.
    pub fn select_target(&self, ants: &[Ant], range: i64) -> Option<usize> {
        // widened: any non-negative i64 range squares without overflow
        let limit = i128::from(range) * i128::from(range);
        let mut target: Option<(usize, i64)> = None;

        for (idx, ant) in ants.iter().enumerate() {
            let dist = ant.pos().squared_distance(self.pos);
            if i128::from(dist) > limit {
                continue;
            }
            if ant.has_cake() {
                return Some(idx);
            }
            if target.map_or(true, |(_, best)| dist < best) {
                target = Some((idx, dist));
            }
        }

        target.map(|(idx, _)| idx)
    }

    /// Firing line from this tower to `target`
    #[inline]
    pub fn beam(&self, target: Coord) -> Segment {
        Segment::new(self.pos, target)
    }

    /// Whether `ant` stands close enough to `beam` to be hit
    #[inline]
    pub fn hits(beam: &Segment, ant: &Ant) -> bool {
        beam.min_squared_distance(ant.pos()) <= beam_reach()
    }
}
