mod app;
mod config;
mod draw;
mod palette;

pub use app::App;
pub use config::Config;
use palette::Palette;
