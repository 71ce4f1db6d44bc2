use std::time::Instant;

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick, after clamping
    pub delta: f32,
}

/// Wall-clock source of per-frame deltas.
///
/// Deltas are clamped to `max_delta` so a stall (debugger, window drag)
/// does not fling the camera on the next frame.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame: u64,
    max_delta: f32,
}

impl Clock {
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: 0,
            max_delta,
        }
    }

    /// Measure the time since the last tick and advance the clock
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let raw = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        let info = FrameInfo {
            number: self.frame,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: raw.min(self.max_delta),
        };
        self.frame += 1;
        info
    }

    /// Restart delta measurement from now, e.g. after a pause
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
