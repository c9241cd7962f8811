use std::time::Instant;

/// Longest delta a single tick may advance the simulation by (seconds)
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame metadata - carries tick number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick, clamped to MAX_FRAME_DELTA
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock tick source for the windowed host.
/// Use in a loop: `let frame = clock.next()`.
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Forget time spent while paused (e.g. window hidden)
    pub fn resync(&mut self) {
        self.last_frame_time = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta.min(MAX_FRAME_DELTA));

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Deterministic tick source for headless runs: `count` ticks of `1 / hz` seconds
#[derive(Debug, Clone)]
pub struct FixedFrames {
    number: u64,
    count: u64,
    delta: f32,
}

impl FixedFrames {
    pub fn new(hz: f32, count: u64) -> Self {
        Self {
            number: 0,
            count,
            delta: (1.0 / hz).min(MAX_FRAME_DELTA),
        }
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.number >= self.count {
            return None;
        }
        let info = FrameInfo::new(self.number, (self.number + 1) as f32 * self.delta, self.delta);
        self.number += 1;
        Some(info)
    }
}
