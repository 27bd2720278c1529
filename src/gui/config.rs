use crate::SimulationConfig;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Redraws keep up with the fastest simulation speed.
    pub const MAX_FPS: f64 = Self::MAX_STEPS_PER_SECOND;

    pub const MIN_CELL_SIZE: f32 = 10.;
    pub const MAX_CELL_SIZE: f32 = 100.;
    pub const DEFAULT_CELL_SIZE: f32 = 10.;

    /// Speed slider bounds, matching the step interval limits.
    pub const MIN_STEPS_PER_SECOND: f64 =
        1000. / SimulationConfig::MAX_STEP_INTERVAL_MS as f64;
    pub const MAX_STEPS_PER_SECOND: f64 =
        1000. / SimulationConfig::MIN_STEP_INTERVAL_MS as f64;

    pub const FRAME_MARGIN: f32 = 8.;
    pub const WINDOW_SLACK: f32 = 16.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 14.;
    pub const HINT_COLOR: Color32 = Color32::GRAY;
    pub const GRID_LINE_WIDTH: f32 = 1.;

    /// Brightness shift of cells under the drawing tool, in `[0, 1]`.
    pub const HIGHLIGHT_COLOR_ADJUST: f32 = 0.25;
    /// Brightness shift of the canvas area outside the field, in `[0, 1]`.
    pub const BACKGROUND_COLOR_ADJUST: f32 = 0.1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimulationController;

    #[test]
    fn test_speed_slider_covers_intervals() {
        let mut controller = SimulationController::new(&SimulationConfig::default()).unwrap();
        let range = Config::MIN_STEPS_PER_SECOND..=Config::MAX_STEPS_PER_SECOND;
        assert!(range.contains(&controller.target_fps()));
        assert_eq!(controller.target_fps(), Config::MAX_STEPS_PER_SECOND);

        assert_eq!(
            controller.set_target_fps(Config::MIN_STEPS_PER_SECOND),
            Ok(SimulationConfig::MAX_STEP_INTERVAL_MS)
        );
        assert_eq!(
            controller.set_target_fps(Config::MAX_STEPS_PER_SECOND),
            Ok(SimulationConfig::MIN_STEP_INTERVAL_MS)
        );
    }
}
