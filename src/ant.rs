use crate::direction::Direction;
use crate::geometry::Coord;
use std::fmt;

/// Scent left on the current cell by an ant without the cake
pub const TRAIL_SCENT: u32 = 2;
/// Scent left on the current cell by the cake carrier
pub const CAKE_SCENT: u32 = 5;

/// Every fifth tick of its life an ant leaves the greedy trail
const EXPLORE_PERIOD: u32 = 5;

/// Read-only view of the world an ant needs to pick its next step.
///
/// Implemented by the world; the ant never owns or stores it.
pub trait Surroundings {
    /// Whether `coord` lies on the grid
    fn is_in_bounds(&self, coord: Coord) -> bool;
    /// Whether another ant or a tower stands on `coord` (must be in bounds)
    fn is_blocked(&self, coord: Coord) -> bool;
    /// Scent on `coord` (must be in bounds)
    fn scent_at(&self, coord: Coord) -> u32;
}

/// Hit points of a freshly spawned ant: `floor(4 * 1.1^level)`
pub fn initial_hp_for(level: u32) -> i64 {
    // `as` saturates, so absurd levels clamp instead of wrapping
    (4.0 * 1.1_f64.powf(f64::from(level))) as i64
}

#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    age: u32,
    level: u32,
    initial_hp: i64,
    hp: i64,
    last_pos: Coord,
    pos: Coord,
    cake: bool,
}

impl Ant {
    /// Create a new ant of the given level at `pos`
    pub fn new(id: u32, pos: Coord, level: u32) -> Self {
        let initial_hp = initial_hp_for(level);
        Self {
            id,
            age: 0,
            level,
            initial_hp,
            hp: initial_hp,
            last_pos: Coord::INVALID,
            pos,
            cake: false,
        }
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    #[inline]
    pub fn initial_hp(&self) -> i64 {
        self.initial_hp
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn last_pos(&self) -> Coord {
        self.last_pos
    }

    #[inline]
    pub fn has_cake(&self) -> bool {
        self.cake
    }

    #[inline]
    pub fn is_at(&self, coord: Coord) -> bool {
        self.pos == coord
    }

    /// Dead means strictly below zero; an ant at exactly 0 hp keeps walking
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp < 0
    }

    /// Scent this ant leaves on its current cell before stepping
    #[inline]
    pub fn scent_strength(&self) -> u32 {
        if self.cake {
            CAKE_SCENT
        } else {
            TRAIL_SCENT
        }
    }

    /// Pick the next cell, or `None` when every neighbour is unavailable.
    ///
    /// Candidates are in-bounds, unblocked and not the cell we just left.
    /// The strongest scent wins, ties go to the earliest direction in
    /// `Direction::ALL`. On exploration ticks the winner is rotated
    /// counter-clockwise until it lands on another candidate.
    pub fn plan_move<S: Surroundings + ?Sized>(&self, env: &S) -> Option<Coord> {
        let mut valid = [false; 4];
        let mut best: Option<(Direction, u32)> = None;

        for direction in Direction::ALL {
            let next = self.pos.offset(direction);
            if !env.is_in_bounds(next) || env.is_blocked(next) || next == self.last_pos {
                continue;
            }
            valid[direction.index()] = true;
            let scent = env.scent_at(next);
            if best.map_or(true, |(_, top)| scent > top) {
                best = Some((direction, scent));
            }
        }

        let (mut direction, _) = best?;
        if self.age % EXPLORE_PERIOD == EXPLORE_PERIOD - 1 {
            // terminates: the greedy direction itself is valid
            direction = direction.rotate_ccw();
            while !valid[direction.index()] {
                direction = direction.rotate_ccw();
            }
        }
        Some(self.pos.offset(direction))
    }

    /// Step onto `next`, remembering the cell just left
    #[inline]
    pub fn commit_move(&mut self, next: Coord) {
        self.last_pos = self.pos;
        self.pos = next;
    }

    /// No way out this tick; the current cell becomes the one to avoid, so
    /// the ant may turn back once the blockage clears
    #[inline]
    pub fn stay_put(&mut self) {
        self.last_pos = self.pos;
    }

    /// Take the cake and heal by half the initial hit points, capped at full health
    pub fn pick_up_cake(&mut self) {
        debug_assert!(!self.cake, "ant {} already carries the cake", self.id);
        self.cake = true;
        self.hp = (self.hp + self.initial_hp / 2).min(self.initial_hp);
    }

    #[inline]
    pub fn take_damage(&mut self, amount: i64) {
        self.hp = self.hp.saturating_sub(amount);
    }

    #[inline]
    pub fn grow_older(&mut self) {
        self.age += 1;
    }
}

/// One dump line: `age level hp row col`
impl fmt::Display for Ant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        assert!(!self.is_dead(), "reporting on dead ant {}", self.id);
        write!(
            f,
            "{} {} {} {} {}",
            self.age, self.level, self.hp, self.pos.row, self.pos.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal open grid for driving `plan_move` by hand
    struct OpenGrid {
        rows: i32,
        cols: i32,
        blocked: Vec<Coord>,
        scent: HashMap<Coord, u32>,
    }

    impl OpenGrid {
        fn new(rows: i32, cols: i32) -> Self {
            Self {
                rows,
                cols,
                blocked: Vec::new(),
                scent: HashMap::new(),
            }
        }

        fn with_scent(mut self, row: i32, col: i32, value: u32) -> Self {
            self.scent.insert(Coord::new(row, col), value);
            self
        }

        fn with_block(mut self, row: i32, col: i32) -> Self {
            self.blocked.push(Coord::new(row, col));
            self
        }
    }

    impl Surroundings for OpenGrid {
        fn is_in_bounds(&self, c: Coord) -> bool {
            c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
        }

        fn is_blocked(&self, c: Coord) -> bool {
            self.blocked.contains(&c)
        }

        fn scent_at(&self, c: Coord) -> u32 {
            self.scent.get(&c).copied().unwrap_or(0)
        }
    }

    fn aged(mut ant: Ant, ticks: u32) -> Ant {
        for _ in 0..ticks {
            ant.grow_older();
        }
        ant
    }

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(7, Coord::NEST, 1);

        assert_eq!(ant.id, 7);
        assert_eq!(ant.age(), 0);
        assert_eq!(ant.level(), 1);
        assert_eq!(ant.hp(), 4);
        assert_eq!(ant.initial_hp(), 4);
        assert_eq!(ant.pos(), Coord::NEST);
        assert_eq!(ant.last_pos(), Coord::INVALID);
        assert!(!ant.has_cake());
        assert!(!ant.is_dead());
    }

    #[test]
    fn test_initial_hp_by_level() {
        assert_eq!(initial_hp_for(0), 4);
        assert_eq!(initial_hp_for(1), 4);
        assert_eq!(initial_hp_for(2), 4);
        assert_eq!(initial_hp_for(3), 5);
        assert_eq!(initial_hp_for(5), 6);
        assert_eq!(initial_hp_for(10), 10);
        assert_eq!(initial_hp_for(20), 26);
    }

    #[test]
    fn test_prefers_strongest_scent() {
        let grid = OpenGrid::new(3, 3).with_scent(2, 1, 9).with_scent(1, 2, 3);
        let ant = Ant::new(0, Coord::new(1, 1), 1);
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(2, 1)));
    }

    #[test]
    fn test_scent_ties_follow_direction_order() {
        let grid = OpenGrid::new(3, 3)
            .with_scent(0, 1, 4)
            .with_scent(1, 0, 4)
            .with_scent(2, 1, 4);
        let ant = Ant::new(0, Coord::new(1, 1), 1);
        // South is enumerated before West and North
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(2, 1)));

        let flat = OpenGrid::new(3, 3);
        assert_eq!(ant.plan_move(&flat), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_never_steps_straight_back() {
        let grid = OpenGrid::new(1, 3).with_scent(0, 0, 50);
        let mut ant = Ant::new(0, Coord::new(0, 0), 1);
        ant.commit_move(Coord::new(0, 1));
        assert_eq!(ant.last_pos(), Coord::new(0, 0));
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_boxed_in_ant_stays_and_may_reverse_later() {
        let grid = OpenGrid::new(1, 2).with_block(0, 1);
        let mut ant = Ant::new(0, Coord::NEST, 1);

        assert_eq!(ant.plan_move(&grid), None);
        ant.stay_put();
        assert_eq!(ant.pos(), Coord::NEST);
        assert_eq!(ant.last_pos(), Coord::NEST);

        let freed = OpenGrid::new(1, 2);
        assert_eq!(ant.plan_move(&freed), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_exploration_rotates_counter_clockwise() {
        let grid = OpenGrid::new(3, 3).with_scent(1, 2, 10);
        let ant = aged(Ant::new(0, Coord::new(1, 1), 1), 4);
        // greedy East, one quarter turn counter-clockwise is North
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(0, 1)));

        let young = aged(Ant::new(0, Coord::new(1, 1), 1), 3);
        assert_eq!(young.plan_move(&grid), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_exploration_skips_invalid_directions() {
        let grid = OpenGrid::new(3, 3);
        let ant = aged(Ant::new(0, Coord::NEST, 1), 9);
        // greedy East; North and West leave the grid, so South
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_exploration_with_single_candidate_keeps_it() {
        let grid = OpenGrid::new(1, 3);
        let mut ant = aged(Ant::new(0, Coord::NEST, 1), 4);
        ant.stay_put();
        assert_eq!(ant.plan_move(&grid), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_scent_strength() {
        let mut ant = Ant::new(0, Coord::NEST, 1);
        assert_eq!(ant.scent_strength(), TRAIL_SCENT);
        ant.pick_up_cake();
        assert_eq!(ant.scent_strength(), CAKE_SCENT);
    }

    #[test]
    fn test_cake_heals_up_to_initial_hp() {
        let mut ant = Ant::new(0, Coord::NEST, 1);
        ant.take_damage(3);
        ant.pick_up_cake();
        assert_eq!(ant.hp(), 3);
        assert!(ant.has_cake());

        let mut lightly_hurt = Ant::new(1, Coord::NEST, 1);
        lightly_hurt.take_damage(1);
        lightly_hurt.pick_up_cake();
        assert_eq!(lightly_hurt.hp(), 4);
    }

    #[test]
    fn test_death_is_strictly_below_zero() {
        let mut ant = Ant::new(0, Coord::NEST, 1);
        ant.take_damage(4);
        assert_eq!(ant.hp(), 0);
        assert!(!ant.is_dead());
        ant.take_damage(1);
        assert!(ant.is_dead());
    }

    #[test]
    fn test_huge_damage_saturates() {
        let mut ant = Ant::new(0, Coord::NEST, 1);
        ant.take_damage(i64::MAX);
        assert_eq!(ant.hp(), 4 - i64::MAX);
        ant.take_damage(i64::MAX);
        assert_eq!(ant.hp(), i64::MIN);
        assert!(ant.is_dead());
    }

    #[test]
    fn test_dump_line() {
        let mut ant = aged(Ant::new(0, Coord::NEST, 2), 3);
        ant.commit_move(Coord::new(0, 1));
        ant.take_damage(1);
        assert_eq!(ant.to_string(), "3 2 3 0 1");
    }
}
