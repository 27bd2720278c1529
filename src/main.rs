#![warn(clippy::all)]

use anyhow::{anyhow, Context};
use clap::Parser;
use conway::{App, Config, SimulationConfig, SimulationController, Topology};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive Conway's Game of Life on a finite field.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns of the field.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = SimulationConfig::DEFAULT_WIDTH as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    width: u32,
    /// Number of rows of the field.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = SimulationConfig::DEFAULT_HEIGHT as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    height: u32,
    /// Milliseconds between two generations while running.
    #[arg(
        long = "interval-ms",
        value_name = "MILLISECONDS",
        default_value_t = SimulationConfig::DEFAULT_STEP_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(
            SimulationConfig::MIN_STEP_INTERVAL_MS..=SimulationConfig::MAX_STEP_INTERVAL_MS
        )
    )]
    interval_ms: u64,
    /// Wrap the field edges around (torus).
    #[arg(long)]
    wrap: bool,
    /// Start without the fading trail of dead cells.
    #[arg(long)]
    no_trace: bool,
    /// Start with a randomly filled field.
    #[arg(long)]
    random: bool,
    /// Seed of the initial random fill; implies `--random`.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Side of a cell in points.
    #[arg(long, value_name = "POINTS", default_value_t = Config::DEFAULT_CELL_SIZE)]
    cell_size: f32,
}

impl Args {
    fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width as usize,
            height: self.height as usize,
            step_interval_ms: self.interval_ms,
            topology: if self.wrap {
                Topology::Torus
            } else {
                Topology::Bounded
            },
            trace: !self.no_trace,
            seed: self.seed,
            random: self.random || self.seed.is_some(),
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.simulation_config();
    let controller =
        SimulationController::new(&config).context("failed to create the simulation")?;
    info!(
        width = config.width,
        height = config.height,
        interval_ms = controller.step_interval_ms(),
        topology = ?config.topology,
        "simulation created"
    );

    let cell_size = args
        .cell_size
        .clamp(Config::MIN_CELL_SIZE, Config::MAX_CELL_SIZE);
    let field = vec2(config.width as f32, config.height as f32) * cell_size;
    let inner_size = field
        + vec2(Config::CONTROL_PANEL_WIDTH, 0.)
        + vec2(2. * Config::FRAME_MARGIN + Config::WINDOW_SLACK, 2. * Config::FRAME_MARGIN);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(controller, cell_size)))),
    )
    .map_err(|err| anyhow!("failed to run the window: {err}"))
}
