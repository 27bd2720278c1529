use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the GUI loop so that frames are not redrawn faster than needed.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed == 0. {
            return 0.;
        }
        1. / self.frametime_smoothed
    }

    /// Sleeps for the rest of the frame budget of `max_fps`.
    pub fn sleep(&mut self, max_fps: f64) {
        let target_frametime = Duration::from_secs_f64(1. / max_fps.max(1.));
        let before_wait = self.frame_timer.elapsed();

        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
