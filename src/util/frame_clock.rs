use web_time::{Duration, Instant};

/// Per-frame delta time, total elapsed time and smoothed FPS.
pub struct FrameClock {
    /// When the clock was created
    start: Instant,
    /// Last tick timestamp
    last_frame: Instant,
    /// Seconds between the last two ticks
    delta: f32,
    /// Upper bound applied to `delta` (stalls, debugger pauses)
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock now. Deltas are capped at a quarter second.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
            delta: 0.0,
            max_delta: 0.25,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Advance to the current instant and return the frame's delta time.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        self.delta = frame_time.min(self.max_delta);
        self.delta
    }

    /// Delta time of the most recent tick, in seconds.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_duration().as_secs_f32()
    }

    /// Time since the clock started.
    pub fn elapsed_duration(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_time_since_last_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert_eq!(clock.delta(), dt);
        let dt = clock.tick_at(start + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_capped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_secs(5)), 0.25);
    }

    #[test]
    fn fps_moves_towards_frame_rate() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let mut now = start;
        for _ in 0..200 {
            now += Duration::from_millis(10);
            let _ = clock.tick_at(now);
        }
        assert!((clock.fps() - 100.0).abs() < 1.0, "fps = {}", clock.fps());
    }

    #[test]
    fn repeated_instant_gives_zero_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start), 0.0);
        assert_eq!(clock.fps(), 60.0);
    }
}
