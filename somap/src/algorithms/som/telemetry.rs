//! A module which provides simple logging of the training progress.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/telemetry_test.rs"]
mod telemetry_test;

use super::{Network, TrainingSummary};
use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode. Messages go to the logger of the network's environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// Specifies how often iteration progress is logged.
        log_every: usize,
    },
}

/// Writes information about training progress into log.
pub(crate) struct Telemetry {
    mode: TelemetryMode,
    logger: InfoLogger,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode, logger: InfoLogger) -> Self {
        Self { mode, logger, time: Timer::start() }
    }

    /// Reports training start.
    pub fn on_start(&self, network: &Network, inputs: usize) {
        self.log(|| {
            format!(
                "[{}s] training {}x{} network on {} inputs of dimension {}: {} iterations, initial radius {:.3}",
                self.time.elapsed_secs(),
                network.width(),
                network.height(),
                inputs,
                network.dimension(),
                network.iterations(),
                network.matrix_radius()
            )
        });
    }

    /// Reports iteration start.
    pub fn on_iteration(&self, iteration: usize, iterations: usize, radius: Float, learning_rate: Float) {
        let should_log = match &self.mode {
            TelemetryMode::OnlyLogging { log_every } => iteration % (*log_every).max(1) == 0,
            TelemetryMode::None => false,
        };

        if should_log {
            self.log(|| {
                format!(
                    "[{}s] iteration {} of {}: radius {:.3}, learning rate {:.5}",
                    self.time.elapsed_secs(),
                    iteration,
                    iterations,
                    radius,
                    learning_rate
                )
            });
        }
    }

    /// Reports training end.
    pub fn on_end(&self, summary: &TrainingSummary) {
        self.log(|| {
            format!(
                "[{}s] training {} after {} iterations in {}ms",
                self.time.elapsed_secs(),
                if summary.is_interrupted { "interrupted" } else { "finished" },
                summary.iterations,
                summary.duration_ms
            )
        });
    }

    /// Returns elapsed time since telemetry was created.
    pub fn elapsed_millis(&self) -> u128 {
        self.time.elapsed_millis()
    }

    fn log<F: FnOnce() -> String>(&self, message: F) {
        if let TelemetryMode::OnlyLogging { .. } = self.mode {
            (self.logger)(message().as_str());
        }
    }
}
