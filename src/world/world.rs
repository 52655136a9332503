use crate::ant::{Ant, Surroundings};
use crate::geometry::{Coord, Segment};
use crate::world::pheromone::PheromoneField;
use crate::world::tower::Tower;

/// No new ant spawns while this many are alive
pub const MAX_ANTS: usize = 6;
/// Every this many spawns the next ants come one level tougher
pub const SPAWNS_PER_LEVEL: u32 = 6;

/// What happened during one call to [`World::tick`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Id and level of the ant spawned at the nest
    pub spawned: Option<(u32, u32)>,
    /// Id of the ant that picked up the cake
    pub cake_taken_by: Option<u32>,
    /// Number of towers that fired
    pub shots: usize,
    /// Ids of ants removed after the volley
    pub killed: Vec<u32>,
    /// The cake reached the nest; the game is over
    pub finished: bool,
}

/// The battlefield: grid bounds, scent, live ants and towers.
///
/// Cells run from `(0, 0)` (the nest) to `(max_row, max_col)` (the cake).
#[derive(Clone, Debug)]
pub struct World {
    max_row: i32,
    max_col: i32,
    damage: i64,
    range: i64,
    spawned: u32,
    pheromones: PheromoneField,
    ants: Vec<Ant>,
    towers: Vec<Tower>,
}

impl World {
    /// Create an empty `(max_row + 1) x (max_col + 1)` world
    pub fn new(max_row: i32, max_col: i32, damage: i64, range: i64) -> Self {
        assert!(
            max_row >= 0 && max_col >= 0,
            "grid bounds must be non-negative, got {max_row}x{max_col}"
        );
        Self {
            max_row,
            max_col,
            damage,
            range,
            spawned: 0,
            pheromones: PheromoneField::new(max_row as usize + 1, max_col as usize + 1),
            ants: Vec::with_capacity(MAX_ANTS),
            towers: Vec::new(),
        }
    }

    /// Place a tower; towers are fixed once the game starts.
    ///
    /// # Panics
    /// If `pos` lies outside the grid.
    pub fn add_tower(&mut self, pos: Coord) {
        assert!(self.is_in_bounds(pos), "tower at {pos} is outside the grid");
        self.towers.push(Tower::new(pos));
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    #[inline]
    pub fn pheromones(&self) -> &PheromoneField {
        &self.pheromones
    }

    /// Total ants spawned so far, dead or alive
    #[inline]
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// The cake's cell
    #[inline]
    pub fn goal(&self) -> Coord {
        Coord::new(self.max_row, self.max_col)
    }

    #[inline]
    pub fn damage(&self) -> i64 {
        self.damage
    }

    #[inline]
    pub fn range(&self) -> i64 {
        self.range
    }

    pub fn ant_at(&self, coord: Coord) -> Option<&Ant> {
        self.ants.iter().find(|a| a.is_at(coord))
    }

    /// Number of ants carrying the cake (0 or 1)
    pub fn cake_carriers(&self) -> usize {
        self.ants.iter().filter(|a| a.has_cake()).count()
    }

    /// Advance the game by one tick.
    ///
    /// Phases run in a fixed order: spawn, move, cake pickup, tower volley,
    /// win check, then (only if the game goes on) scent decay and aging.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport {
            spawned: self.spawn(),
            ..TickReport::default()
        };

        self.move_ants();
        report.cake_taken_by = self.hand_out_cake();

        let (shots, killed) = self.volley();
        report.shots = shots;
        report.killed = killed;

        if let Some(winner) = self
            .ants
            .iter()
            .find(|a| a.has_cake() && a.is_at(Coord::NEST))
        {
            tracing::debug!("ant {} brought the cake home", winner.id);
            report.finished = true;
            return report;
        }

        self.pheromones.decay();
        for ant in &mut self.ants {
            ant.grow_older();
        }
        report
    }

    fn spawn(&mut self) -> Option<(u32, u32)> {
        // towers on the nest do not block spawning, only ants do
        if self.ants.len() >= MAX_ANTS || self.ants.iter().any(|a| a.is_at(Coord::NEST)) {
            return None;
        }
        let id = self.spawned;
        let level = id / SPAWNS_PER_LEVEL + 1;
        self.ants.push(Ant::new(id, Coord::NEST, level));
        self.spawned += 1;
        tracing::debug!("spawned ant {id} at level {level}");
        Some((id, level))
    }

    /// Each ant marks its cell and steps, in collection order; later ants see
    /// where earlier ones already went
    fn move_ants(&mut self) {
        for idx in 0..self.ants.len() {
            let ant = &self.ants[idx];
            self.pheromones.deposit(ant.pos(), ant.scent_strength());
            match self.ants[idx].plan_move(&*self) {
                Some(next) => self.ants[idx].commit_move(next),
                None => self.ants[idx].stay_put(),
            }
        }
    }

    fn hand_out_cake(&mut self) -> Option<u32> {
        if self.cake_carriers() > 0 {
            return None;
        }
        let goal = self.goal();
        let mut taker = None;
        for ant in &mut self.ants {
            if taker.is_none() && ant.is_at(goal) {
                ant.pick_up_cake();
                taker = Some(ant.id);
            }
        }
        if let Some(id) = taker {
            tracing::debug!("ant {id} picked up the cake");
        }
        taker
    }

    /// All towers aim first, then all fire, then the dead are swept out.
    /// Returns the number of shots and the ids of the removed ants.
    fn volley(&mut self) -> (usize, Vec<u32>) {
        let beams: Vec<Segment> = self
            .towers
            .iter()
            .filter_map(|tower| {
                tower
                    .select_target(&self.ants, self.range)
                    .map(|idx| tower.beam(self.ants[idx].pos()))
            })
            .collect();

        let damage = self.damage;
        for beam in &beams {
            for ant in &mut self.ants {
                if Tower::hits(beam, ant) {
                    ant.take_damage(damage);
                }
            }
        }

        let killed: Vec<u32> = self
            .ants
            .iter()
            .filter(|a| a.is_dead())
            .map(|a| a.id)
            .collect();
        if !killed.is_empty() {
            tracing::debug!("towers killed ants {killed:?}");
            self.ants.retain(|a| !a.is_dead());
        }
        (beams.len(), killed)
    }
}

impl Surroundings for World {
    #[inline]
    fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row <= self.max_row && coord.col >= 0 && coord.col <= self.max_col
    }

    fn is_blocked(&self, coord: Coord) -> bool {
        assert!(self.is_in_bounds(coord), "occupancy query outside the grid at {coord}");
        self.ants.iter().any(|a| a.is_at(coord)) || self.towers.iter().any(|t| t.pos == coord)
    }

    #[inline]
    fn scent_at(&self, coord: Coord) -> u32 {
        self.pheromones.get(coord)
    }
}
