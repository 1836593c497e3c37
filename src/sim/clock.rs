//! Millisecond clocks for agent timing decisions

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock, measured from when it was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand (headless runs and tests)
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move time forward. Negative amounts are ignored (the clock is monotonic).
    pub fn advance(&self, ms: f64) {
        if ms > 0.0 {
            self.now.set(self.now.get() + ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
