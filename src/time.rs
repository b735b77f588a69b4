//! Frame timing for the window title.
//!
//! The simulation itself is frame-stepped and never reads the clock; this
//! only reports how fast frames are being produced.

use std::time::{Duration, Instant};

/// Counts frames and estimates FPS over a sliding interval.
#[derive(Debug)]
pub struct FrameTimer {
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameTimer {
    /// Create a timer starting from now.
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame at `now`. Returns `true` when the FPS estimate changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.frame_count += 1;

        let since = now.saturating_duration_since(self.fps_update_time);
        if since < self.fps_update_interval {
            return false;
        }

        let frames = self.frame_count - self.fps_frame_count;
        self.fps = frames as f32 / since.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        true
    }

    /// Most recent FPS estimate.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_updates_after_interval() {
        let mut timer = FrameTimer::new();
        let start = timer.fps_update_time;

        for i in 1..30 {
            assert!(!timer.tick(start + Duration::from_millis(i * 10)));
        }
        assert!(timer.tick(start + Duration::from_millis(1000)));
        assert_eq!(timer.frame_count, 30);
        assert!((timer.fps() - 30.0).abs() < 0.01);
    }
}
