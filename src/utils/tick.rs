use std::time::{Duration, Instant};

/// Timer that drives `SimulationController::tick`.
///
/// The next deadline is computed when the timer fires, from the interval
/// passed at that moment; changing the interval afterwards only affects the
/// deadline after the one already scheduled.
pub struct TickTimer {
    next_deadline: Option<Instant>,
    last_fired: Option<Instant>,
    interval_smoothed: f64,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    pub fn new() -> Self {
        Self {
            next_deadline: None,
            last_fired: None,
            interval_smoothed: 0.,
        }
    }

    /// Returns `true` if the timer fires at `now`.
    ///
    /// A timer that was never armed fires immediately. Missed deadlines
    /// are coalesced into a single firing.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if let Some(deadline) = self.next_deadline {
            if now < deadline {
                return false;
            }
        }
        self.next_deadline = Some(now + interval);

        if let Some(last) = self.last_fired {
            let elapsed = now.saturating_duration_since(last).as_secs_f64();
            if self.interval_smoothed == 0. {
                self.interval_smoothed = elapsed;
            } else {
                self.interval_smoothed += (elapsed - self.interval_smoothed) * 0.1;
            }
        }
        self.last_fired = Some(now);
        true
    }

    /// Forgets the schedule, e.g. after the simulation was paused.
    pub fn disarm(&mut self) {
        self.next_deadline = None;
        self.last_fired = None;
        self.interval_smoothed = 0.;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    /// Smoothed rate of firings per second, `None` until measured.
    pub fn rate(&self) -> Option<f64> {
        (self.interval_smoothed > 0.).then(|| 1. / self.interval_smoothed)
    }
}

#[cfg(test)]
mod tests {
    use super::TickTimer;
    use std::time::{Duration, Instant};

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_on_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new();

        assert!(timer.poll(start, MS * 100));
        assert!(!timer.poll(start + MS * 50, MS * 100));
        assert!(timer.poll(start + MS * 100, MS * 100));
        assert_eq!(timer.next_deadline(), Some(start + MS * 200));
    }

    #[test]
    fn test_interval_change_waits_for_scheduled_tick() {
        let start = Instant::now();
        let mut timer = TickTimer::new();

        assert!(timer.poll(start, MS * 500));
        // a shorter interval does not pull the pending deadline forward
        assert!(!timer.poll(start + MS * 20, MS * 10));
        assert!(timer.poll(start + MS * 500, MS * 10));
        assert!(timer.poll(start + MS * 510, MS * 10));
    }

    #[test]
    fn test_missed_deadlines_coalesce() {
        let start = Instant::now();
        let mut timer = TickTimer::new();

        assert!(timer.poll(start, MS * 10));
        assert!(timer.poll(start + MS * 95, MS * 10));
        assert!(!timer.poll(start + MS * 100, MS * 10));
        assert!(timer.poll(start + MS * 105, MS * 10));
    }

    #[test]
    fn test_rate() {
        let start = Instant::now();
        let mut timer = TickTimer::new();
        assert_eq!(timer.rate(), None);

        timer.poll(start, MS * 100);
        timer.poll(start + MS * 100, MS * 100);
        let rate = timer.rate().unwrap();
        assert!((rate - 10.).abs() < 1e-9, "rate={}", rate);

        timer.disarm();
        assert_eq!(timer.rate(), None);
        assert!(timer.poll(start + MS * 110, MS * 100));
    }
}
