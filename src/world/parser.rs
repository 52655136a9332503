use crate::error::{ParseError, Result};
use crate::geometry::Coord;
use crate::world::world::World;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Everything read from the input before the first tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub max_row: i32,
    pub max_col: i32,
    pub damage: i64,
    pub range: i64,
    pub towers: Vec<Coord>,
    pub ticks: u32,
}

impl Scenario {
    /// Fresh world with every tower in place
    pub fn build_world(&self) -> World {
        let mut world = World::new(self.max_row, self.max_col, self.damage, self.range);
        for &pos in &self.towers {
            world.add_tower(pos);
        }
        world
    }
}

/// Whitespace token stream with typed reads
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            inner: src.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.inner.next().ok_or(ParseError::MissingToken(what))?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            what,
            token: token.to_string(),
        })
    }

    fn next_non_negative<T>(&mut self, what: &'static str) -> Result<T>
    where
        T: FromStr + Into<i64> + Copy,
    {
        let value: T = self.next(what)?;
        let wide: i64 = value.into();
        if wide < 0 {
            return Err(ParseError::NegativeValue { what, value: wide });
        }
        Ok(value)
    }
}

/// Parse a scenario from a file path
pub fn parse_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let src = fs::read_to_string(path)?;
    parse_scenario_from_str(&src)
}

/// Parse a scenario from any reader (stdin in the binary)
pub fn read_scenario<R: Read>(mut reader: R) -> Result<Scenario> {
    let mut src = String::new();
    reader.read_to_string(&mut src)?;
    parse_scenario_from_str(&src)
}

/// Parse `n m s d r`, then `s` tower coordinates, then the tick budget
pub fn parse_scenario_from_str(src: &str) -> Result<Scenario> {
    let mut tokens = Tokens::new(src);

    let max_row: i32 = tokens.next_non_negative("grid rows")?;
    let max_col: i32 = tokens.next_non_negative("grid columns")?;
    let tower_count: u32 = tokens.next("tower count")?;
    let damage: i64 = tokens.next_non_negative("damage")?;
    let range: i64 = tokens.next_non_negative("range")?;

    // the count is untrusted until the coordinates actually show up
    let mut towers = Vec::with_capacity(tower_count.min(64) as usize);
    for _ in 0..tower_count {
        let row: i32 = tokens.next("tower row")?;
        let col: i32 = tokens.next("tower column")?;
        if !(0..=max_row).contains(&row) || !(0..=max_col).contains(&col) {
            return Err(ParseError::TowerOutOfBounds {
                row,
                col,
                max_row,
                max_col,
            });
        }
        towers.push(Coord::new(row, col));
    }

    let ticks: u32 = tokens.next("tick count")?;

    Ok(Scenario {
        max_row,
        max_col,
        damage,
        range,
        towers,
        ticks,
    })
}
