/// Frame timing
///
/// Tracks frame count and a windowed FPS average for the status log.
/// The controller itself is per-frame (speeds are units/frame), so there
/// is no fixed-timestep accumulation here; one redraw equals one tick.
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// How many frames between FPS recomputations
const FPS_REFRESH_FRAMES: u64 = 10;

pub struct FrameClock {
    last_frame_time: Instant,
    frame_times: Vec<Duration>,
    frame_count: u64,
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Mark the start of a new frame
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % FPS_REFRESH_FRAMES == 0 {
            self.update_fps();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }
        let total: Duration = self.frame_times.iter().sum();
        let average = total.as_secs_f32() / self.frame_times.len() as f32;
        if average > 0.0 {
            self.current_fps = 1.0 / average;
        }
    }

    /// Total frames since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Windowed average FPS (0.0 until the first refresh)
    pub fn fps(&self) -> f32 {
        self.current_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
