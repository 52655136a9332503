use crate::geometry::Coord;

/// Per-cell scent counters, stored row-major in one flat buffer
#[derive(Clone, Debug)]
pub struct PheromoneField {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl PheromoneField {
    /// Create an all-zero field of `rows x cols` cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    fn slot(&self, coord: Coord) -> usize {
        assert!(
            coord.row >= 0
                && coord.col >= 0
                && (coord.row as usize) < self.rows
                && (coord.col as usize) < self.cols,
            "pheromone access outside the grid at {coord}"
        );
        coord.row as usize * self.cols + coord.col as usize
    }

    /// Current scent at `coord`
    #[inline]
    pub fn get(&self, coord: Coord) -> u32 {
        self.cells[self.slot(coord)]
    }

    /// Add `amount` to the cell; no upper bound
    #[inline]
    pub fn deposit(&mut self, coord: Coord, amount: u32) {
        let slot = self.slot(coord);
        self.cells[slot] += amount;
    }

    /// One tick of evaporation: every positive cell loses exactly one unit
    pub fn decay(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.saturating_sub(1);
        }
    }

    /// Sum over all cells
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }
}
