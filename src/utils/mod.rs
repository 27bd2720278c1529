mod config;
mod error;
mod format_int;
mod fps_limit;
mod tick;
mod topology;

pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use format_int::{population_summary, NiceInt};
pub use fps_limit::FpsLimiter;
pub use tick::TickTimer;
pub use topology::Topology;
