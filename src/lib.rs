mod controller;
mod grid;
mod gui;
pub mod patterns;
mod trail;
mod utils;

pub use controller::{RunState, SimulationController};
pub use grid::{next_state, Grid};
pub use gui::{App, Config};
pub use patterns::{affected_cells, Shape, SHAPES};
pub use trail::Trail;
pub use utils::{
    population_summary, FpsLimiter, LifeError, NiceInt, Result, SimulationConfig, TickTimer,
    Topology,
};
