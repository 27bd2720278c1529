use super::Config;
use crate::Trail;
use eframe::egui::{ecolor::Hsva, Color32};

/// Cell colors, interpolated from dead to live for every trail level.
pub struct Palette {
    live: Color32,
    dead: Color32,
    levels: Vec<Color32>,
}

impl Palette {
    pub fn new(live: Color32, dead: Color32) -> Self {
        let mut palette = Self {
            live,
            dead,
            levels: vec![],
        };
        palette.recompute();
        palette
    }

    pub fn random() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut color = || Color32::from_rgb(rng.gen(), rng.gen(), rng.gen());
        let live = color();
        let dead = color();
        Self::new(live, dead)
    }

    fn recompute(&mut self) {
        let (a, b) = (self.dead, self.live);
        let lerp = |x: u8, y: u8, t: f32| (x as f32 + (y as f32 - x as f32) * t) as u8;
        self.levels = (0..=Trail::LIVE_LEVEL)
            .map(|level| {
                let t = level as f32 / Trail::LIVE_LEVEL as f32;
                Color32::from_rgb(lerp(a.r(), b.r(), t), lerp(a.g(), b.g(), t), lerp(a.b(), b.b(), t))
            })
            .collect();
    }

    pub fn live(&self) -> Color32 {
        self.live
    }

    pub fn dead(&self) -> Color32 {
        self.dead
    }

    pub fn set_live(&mut self, color: Color32) {
        self.live = color;
        self.recompute();
    }

    pub fn set_dead(&mut self, color: Color32) {
        self.dead = color;
        self.recompute();
    }

    pub fn level(&self, level: u8) -> Color32 {
        let idx = (level as usize).min(self.levels.len() - 1);
        self.levels[idx]
    }

    /// Halfway between dead and live.
    pub fn grid_line(&self) -> Color32 {
        self.level(Trail::LIVE_LEVEL / 2)
    }

    pub fn background(&self) -> Color32 {
        adjust_brightness(self.dead, Config::BACKGROUND_COLOR_ADJUST)
    }
}

/// Shifts brightness of `color` by `amount` in `[0, 1]`, darkening or
/// lightening depending on which direction gives the larger difference.
pub fn adjust_brightness(color: Color32, amount: f32) -> Color32 {
    let mut hsva = Hsva::from(color);
    let amount = amount.min(hsva.v.max(1. - hsva.v));
    if hsva.v >= amount {
        hsva.v -= amount;
    } else {
        hsva.v += amount;
    }
    Color32::from(hsva)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_span_dead_to_live() {
        let palette = Palette::new(Color32::from_rgb(200, 100, 0), Color32::from_rgb(0, 0, 100));
        assert_eq!(palette.level(0), palette.dead());
        assert_eq!(palette.level(Trail::LIVE_LEVEL), palette.live());
        assert_eq!(palette.level(u8::MAX), palette.live());
        assert_eq!(palette.grid_line(), Color32::from_rgb(100, 50, 50));
    }

    #[test]
    fn test_adjust_brightness() {
        assert_ne!(adjust_brightness(Color32::BLACK, 0.25), Color32::BLACK);
        assert_ne!(adjust_brightness(Color32::WHITE, 0.25), Color32::WHITE);
        assert_eq!(adjust_brightness(Color32::WHITE, 0.), Color32::WHITE);
    }
}
