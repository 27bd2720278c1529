#[cfg(feature = "parallel")]
mod parallel;

use crate::{LifeError, Result, Topology};
use std::fmt;

/// Standard Life rule: a live cell survives with 2 or 3 neighbors,
/// a dead cell is born with exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Finite field of Conway's Game of Life.
///
/// Cells are stored row-major. `cells_next` is the buffer the next
/// generation is written into, so every cell of a step is computed from
/// the untouched previous generation.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    topology: Topology,
    population: usize,
}

impl Grid {
    /// Creates a blank field.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let area = Self::checked_area(width, height)?;
        Self::from_cells(width, height, vec![false; area])
    }

    /// Creates a field from row-major cell states.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        let area = Self::checked_area(width, height)?;
        if cells.len() != area {
            return Err(LifeError::PatternMismatch {
                expected: area,
                actual: cells.len(),
            });
        }
        let population = cells.iter().filter(|&&c| c).count();
        Ok(Self {
            cells,
            cells_next: vec![],
            width,
            height,
            topology: Topology::default(),
            population,
        })
    }

    /// Creates a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let area = Self::checked_area(width, height)?;
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let cells = (0..area)
            .map(|_| rng.gen_bool(fill_rate))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Number of cells of a `width` x `height` field, if such a field can exist.
    fn checked_area(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .filter(|&area| area > 0 && area <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimensions { width, height })
    }

    /// Blank field with the same dimensions and topology.
    pub fn blank_like(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            cells_next: vec![],
            width: self.width,
            height: self.height,
            topology: self.topology,
            population: 0,
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Cell states of row `y`.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Coordinates of all live cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        let in_range = |pos: i64, len: usize| (0..len as i64).contains(&pos);
        if in_range(x, self.width) && in_range(y, self.height) {
            Ok(x as usize + y as usize * self.width)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell state at (x, y).
    pub fn get(&self, x: i64, y: i64) -> Result<bool> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Set cell state at (x, y).
    ///
    /// Returns whether the state changed.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> Result<bool> {
        let idx = self.index(x, y)?;
        let cell = &mut self.cells[idx];
        if *cell == alive {
            return Ok(false);
        }
        *cell = alive;
        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        Ok(true)
    }

    /// Flips cell at (x, y) and returns its new state.
    pub fn toggle(&mut self, x: i64, y: i64) -> Result<bool> {
        let alive = !self.get(x, y)?;
        self.set(x, y, alive)?;
        Ok(alive)
    }

    /// Number of live cells in the Moore neighborhood of (x, y).
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> Result<u8> {
        self.index(x, y)?;
        Ok(self.neighbors_at(x as usize, y as usize))
    }

    fn neighbors_at(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            let Some(ny) = self.topology.wrap(y as i64 + dy, self.height) else {
                continue;
            };
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(nx) = self.topology.wrap(x as i64 + dx, self.width) else {
                    continue;
                };
                count += self.cells[nx + ny * self.width] as u8;
            }
        }
        count
    }

    /// Writes row `y` of the next generation into `dst` and returns its population.
    fn step_row(&self, y: usize, dst: &mut [bool]) -> usize {
        let row = &self.cells[y * self.width..(y + 1) * self.width];
        let mut population = 0;
        for (x, (next, &alive)) in dst.iter_mut().zip(row).enumerate() {
            *next = next_state(alive, self.neighbors_at(x, y));
            population += *next as usize;
        }
        population
    }

    fn take_next_buffer(&mut self) -> Vec<bool> {
        let mut next = std::mem::take(&mut self.cells_next);
        next.clear();
        next.resize(self.cells.len(), false);
        next
    }

    fn finish_step(&mut self, next: Vec<bool>, population: usize) {
        self.cells_next = std::mem::replace(&mut self.cells, next);
        self.population = population;
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) {
        let mut next = self.take_next_buffer();
        let this = &*self;
        let population = next
            .chunks_exact_mut(this.width)
            .enumerate()
            .map(|(y, row)| this.step_row(y, row))
            .sum();
        self.finish_step(next, population);
    }

    /// Sets every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.population = 0;
    }

    /// Returns a field of the new dimensions with the overlapping region copied.
    pub fn resize(&self, width: usize, height: usize) -> Result<Self> {
        let mut result = Self::new(width, height)?.with_topology(self.topology);
        let w = self.width.min(width);
        for y in 0..self.height.min(height) {
            let src = &self.cells[y * self.width..y * self.width + w];
            result.cells[y * width..y * width + w].copy_from_slice(src);
        }
        result.population = result.cells.iter().filter(|&&c| c).count();
        Ok(result)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.topology == other.topology
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            let line = row
                .iter()
                .map(|&c| if c { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
