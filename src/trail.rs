use crate::Grid;

/// Fade levels of the cells, used to draw where live cells have been.
///
/// A live cell has level [`Trail::LIVE_LEVEL`]. After every generation a
/// dead cell with a non-zero level fades by one, down to 1: the faintest
/// trace never disappears on its own. Cells that were never alive stay at 0.
#[derive(Clone, Debug)]
pub struct Trail {
    levels: Vec<u8>,
    width: usize,
    enabled: bool,
}

impl Trail {
    pub const LIVE_LEVEL: u8 = 16;

    pub fn new(grid: &Grid, enabled: bool) -> Self {
        let levels = grid
            .cells()
            .iter()
            .map(|&alive| if alive { Self::LIVE_LEVEL } else { 0 })
            .collect();
        Self {
            levels,
            width: grid.width(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning the trail off drops every faded cell.
    pub fn set_enabled(&mut self, enabled: bool, grid: &Grid) {
        self.enabled = enabled;
        if !enabled {
            *self = Self::new(grid, false);
        }
    }

    /// Updates levels after `grid` advanced by one generation.
    pub fn advance(&mut self, grid: &Grid) {
        if self.levels.len() != grid.area() || self.width != grid.width() {
            *self = Self::new(grid, self.enabled);
            return;
        }
        for (level, &alive) in self.levels.iter_mut().zip(grid.cells()) {
            *level = if alive {
                Self::LIVE_LEVEL
            } else if self.enabled && *level > 0 {
                (*level - 1).max(1)
            } else {
                0
            };
        }
    }

    /// Records an edit of a single cell.
    pub fn mark(&mut self, x: usize, y: usize, alive: bool) {
        if let Some(level) = self.levels.get_mut(x + y * self.width) {
            *level = if alive { Self::LIVE_LEVEL } else { 0 };
        }
    }

    /// Level of cell (x, y); 0 outside the field.
    pub fn level(&self, x: usize, y: usize) -> u8 {
        if x >= self.width {
            return 0;
        }
        self.levels.get(x + y * self.width).copied().unwrap_or(0)
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels
    }
}
