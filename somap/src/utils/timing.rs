#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use crate::utils::Float;
use std::time::{Duration, Instant};

/// Measures time elapsed since training start.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in whole seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Returns elapsed time in seconds with fractional part.
    pub fn elapsed_secs_as_float(&self) -> Float {
        self.elapsed().as_secs_f64() as Float
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
