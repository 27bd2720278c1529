use super::Topology;

/// Startup parameters of a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Delay between two timer ticks, clamped into
    /// `MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS` by the controller.
    pub step_interval_ms: u64,
    pub topology: Topology,
    /// Whether recently dead cells leave a fading trail.
    pub trace: bool,
    /// Seed for the initial random fill; `None` with `random == false` starts blank.
    pub seed: Option<u64>,
    pub random: bool,
    pub fill_rate: f64,
    /// Grids with at least this many cells are stepped in parallel.
    pub parallel_threshold: usize,
}

impl SimulationConfig {
    pub const DEFAULT_WIDTH: usize = 50;
    pub const DEFAULT_HEIGHT: usize = 50;

    pub const MIN_STEP_INTERVAL_MS: u64 = 16;
    pub const MAX_STEP_INTERVAL_MS: u64 = 1000;
    pub const DEFAULT_STEP_INTERVAL_MS: u64 = 1000 / 60;

    pub const DEFAULT_FILL_RATE: f64 = 0.5;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            step_interval_ms: Self::DEFAULT_STEP_INTERVAL_MS,
            topology: Topology::Bounded,
            trace: true,
            seed: None,
            random: false,
            fill_rate: Self::DEFAULT_FILL_RATE,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
