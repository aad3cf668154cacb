/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Frame-rate estimate over a sliding window of frame deltas.
pub struct FpsCounter {
    deltas: [f32; FpsCounter::WINDOW],
    cursor: usize,
    filled: usize,
}

impl FpsCounter {
    const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            deltas: [0.0; Self::WINDOW],
            cursor: 0,
            filled: 0,
        }
    }

    /// Record one frame delta (seconds).
    pub fn record(&mut self, frame_dt: f32) {
        self.deltas[self.cursor] = frame_dt;
        self.cursor = (self.cursor + 1) % Self::WINDOW;
        self.filled = (self.filled + 1).min(Self::WINDOW);
    }

    /// Average frames per second over the window. Zero until the first frame.
    pub fn fps(&self) -> f32 {
        if self.filled == 0 {
            return 0.0;
        }
        let sum: f32 = self.deltas[..self.filled].iter().sum();
        if sum <= 0.0 {
            return 0.0;
        }
        self.filled as f32 / sum
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
