use crate::{
    patterns::{affected_cells, Shape},
    Grid, LifeError, Result, SimulationConfig, Topology, Trail,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Play/pause/step/speed state of the simulation.
///
/// The controller exclusively owns the grid: renderers get read-only access
/// through [`SimulationController::grid`], every mutation goes through the
/// methods below. Resetting, randomizing and resizing replace the grid
/// instead of mutating it.
pub struct SimulationController {
    grid: Grid,
    trail: Trail,
    run_state: RunState,
    step_interval_ms: u64,
    generation: u64,
    fill_rate: f64,
    parallel_threshold: usize,
    last_step_duration: Duration,
}

impl SimulationController {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let grid = if config.random {
            Grid::random(config.width, config.height, config.seed, config.fill_rate)?
        } else {
            Grid::new(config.width, config.height)?
        }
        .with_topology(config.topology);

        let mut controller = Self::with_grid(grid);
        controller.trail = Trail::new(&controller.grid, config.trace);
        controller.step_interval_ms = Self::clamp_interval(config.step_interval_ms);
        controller.fill_rate = config.fill_rate;
        controller.parallel_threshold = config.parallel_threshold;
        Ok(controller)
    }

    /// Controller around an existing grid, with default settings.
    pub fn with_grid(grid: Grid) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            trail: Trail::new(&grid, defaults.trace),
            grid,
            run_state: RunState::Stopped,
            step_interval_ms: defaults.step_interval_ms,
            generation: 0,
            fill_rate: defaults.fill_rate,
            parallel_threshold: defaults.parallel_threshold,
            last_step_duration: Duration::ZERO,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Steps per second matching the current interval.
    pub fn target_fps(&self) -> f64 {
        1000. / self.step_interval_ms as f64
    }

    /// Duration of the last generation update.
    pub fn last_step_duration(&self) -> Duration {
        self.last_step_duration
    }

    pub fn topology(&self) -> Topology {
        self.grid.topology()
    }

    pub fn trace_enabled(&self) -> bool {
        self.trail.is_enabled()
    }

    pub fn start(&mut self) {
        if self.run_state == RunState::Stopped {
            self.run_state = RunState::Running;
            debug!(generation = self.generation, "simulation started");
        }
    }

    pub fn stop(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Stopped;
            debug!(generation = self.generation, "simulation stopped");
        }
    }

    pub fn toggle_run(&mut self) {
        match self.run_state {
            RunState::Stopped => self.start(),
            RunState::Running => self.stop(),
        }
    }

    #[cfg(feature = "parallel")]
    fn step_grid(&mut self) {
        if self.grid.area() >= self.parallel_threshold {
            self.grid.step_parallel();
        } else {
            self.grid.step();
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn step_grid(&mut self) {
        self.grid.step();
    }

    fn advance(&mut self) {
        let timer = Instant::now();
        self.step_grid();
        self.last_step_duration = timer.elapsed();

        self.trail.advance(&self.grid);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            elapsed_us = self.last_step_duration.as_micros() as u64,
            "generation advanced"
        );
    }

    /// Advances one generation regardless of the run state.
    ///
    /// Returns the new generation number.
    pub fn step_once(&mut self) -> u64 {
        self.advance();
        self.generation
    }

    /// Timer callback: advances one generation only while running.
    ///
    /// Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        if self.run_state == RunState::Stopped {
            return false;
        }
        self.advance();
        true
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.trail = Trail::new(&grid, self.trail.is_enabled());
        self.grid = grid;
        self.generation = 0;
    }

    /// Replaces the grid with a blank one; the run state is kept.
    pub fn reset(&mut self) {
        let blank = self.grid.blank_like();
        self.replace_grid(blank);
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "grid reset"
        );
    }

    /// Replaces the grid with randomly filled one of the same dimensions;
    /// the run state is kept.
    pub fn randomize(&mut self, seed: Option<u64>) -> Result<()> {
        let grid = Grid::random(self.grid.width(), self.grid.height(), seed, self.fill_rate)?
            .with_topology(self.grid.topology());
        self.replace_grid(grid);
        info!(
            population = self.grid.population(),
            seed = ?seed,
            "grid randomized"
        );
        Ok(())
    }

    fn clamp_interval(interval_ms: u64) -> u64 {
        interval_ms.clamp(
            SimulationConfig::MIN_STEP_INTERVAL_MS,
            SimulationConfig::MAX_STEP_INTERVAL_MS,
        )
    }

    /// Sets the delay between ticks, clamped into the supported range.
    ///
    /// Returns the interval actually applied.
    pub fn set_speed(&mut self, interval_ms: i64) -> Result<u64> {
        if interval_ms <= 0 {
            return Err(LifeError::InvalidSpeed(interval_ms));
        }
        self.step_interval_ms = Self::clamp_interval(interval_ms as u64);
        debug!(
            requested = interval_ms,
            applied = self.step_interval_ms,
            "step interval changed"
        );
        Ok(self.step_interval_ms)
    }

    /// Same as [`SimulationController::set_speed`], expressed in steps per second.
    pub fn set_target_fps(&mut self, fps: f64) -> Result<u64> {
        if !fps.is_finite() || fps <= 0. {
            return Err(LifeError::InvalidStepRate(fps));
        }
        self.set_speed(((1000. / fps) as i64).max(1))
    }

    /// Flips a single cell; allowed while running.
    ///
    /// Returns the new state of the cell.
    pub fn edit_cell(&mut self, x: i64, y: i64) -> Result<bool> {
        let alive = self.grid.toggle(x, y)?;
        self.trail.mark(x as usize, y as usize, alive);
        Ok(alive)
    }

    /// Sets every cell covered by `shape` anchored at (x, y) to `alive`.
    ///
    /// Returns the number of cells that changed.
    pub fn paint(&mut self, x: i64, y: i64, shape: &Shape, alive: bool) -> Result<usize> {
        self.grid.get(x, y)?;
        let mut changed = 0;
        for (cx, cy) in affected_cells(&self.grid, x, y, shape) {
            if self.grid.set(cx as i64, cy as i64, alive)? {
                self.trail.mark(cx, cy, alive);
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Replaces the grid with a resized copy and resets the generation.
    pub fn resize_grid(&mut self, width: usize, height: usize) -> Result<()> {
        let grid = self.grid.resize(width, height)?;
        self.replace_grid(grid);
        info!(width, height, "grid resized");
        Ok(())
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.grid.set_topology(topology);
        debug!(?topology, "topology changed");
    }

    pub fn toggle_wrap(&mut self) {
        self.set_topology(self.grid.topology().toggled());
    }

    pub fn set_trace(&mut self, enabled: bool) {
        self.trail.set_enabled(enabled, &self.grid);
    }

    pub fn toggle_trace(&mut self) {
        self.set_trace(!self.trail.is_enabled());
    }
}
