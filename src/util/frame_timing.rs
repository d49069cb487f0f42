use web_time::{Duration, Instant};

/// Frame timing with smoothed FPS and per-frame delta.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Upper bound on a single frame delta
    max_delta: Duration,
}

impl FrameTiming {
    /// Create a new frame timer. Deltas longer than `max_delta` (e.g. after
    /// the window was hidden) are clamped so timers do not burst.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            max_delta,
        }
    }

    /// Call once per frame. Returns the (clamped) time since the previous
    /// call.
    pub fn end_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_clamped() {
        let mut timing = FrameTiming::new(Duration::ZERO);
        assert_eq!(timing.end_frame(), Duration::ZERO);
    }

    #[test]
    fn fps_starts_at_sixty() {
        let timing = FrameTiming::default();
        assert_eq!(timing.fps(), 60.0);
    }
}
