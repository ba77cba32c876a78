#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/config_test.rs"]
mod config_test;

use crate::utils::{Float, InvalidArgument, SomResult};
use serde::{Deserialize, Serialize};

/// Specifies how the initial neighborhood radius is derived from the grid size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadiusPolicy {
    /// Half of the largest grid side as real number: `max(width, height) / 2.0`.
    #[default]
    Exact,
    /// Half of the largest grid side rounded down: `max(width, height) / 2` in integers.
    /// Matches the schedule of the original integer-arithmetic trainer, e.g. `radius(2) ~ 1.97`
    /// for a 5x5 map trained for 100 iterations.
    Truncated,
}

impl RadiusPolicy {
    /// Returns the initial neighborhood radius for the grid of given size.
    pub fn matrix_radius(&self, width: usize, height: usize) -> Float {
        let side = width.max(height);

        match self {
            Self::Exact => side as Float / 2.,
            Self::Truncated => (side / 2) as Float,
        }
    }
}

/// Network configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Amount of neurons along x axis.
    pub width: usize,
    /// Amount of neurons along y axis.
    pub height: usize,
    /// Dimension of input vectors and neuron weights.
    pub input_dimension: usize,
    /// Amount of full passes over the input sequence.
    pub iterations: usize,
    /// Initial learning rate.
    pub learning_rate: Float,
    /// Initial neighborhood radius policy.
    pub radius_policy: RadiusPolicy,
}

impl NetworkConfig {
    /// Creates a new instance of `NetworkConfig` with default radius policy.
    pub fn new(width: usize, height: usize, input_dimension: usize, iterations: usize, learning_rate: Float) -> Self {
        Self { width, height, input_dimension, iterations, learning_rate, radius_policy: RadiusPolicy::default() }
    }

    /// Sets radius policy.
    pub fn with_radius_policy(mut self, radius_policy: RadiusPolicy) -> Self {
        self.radius_policy = radius_policy;
        self
    }

    /// Returns the initial neighborhood radius.
    pub fn matrix_radius(&self) -> Float {
        self.radius_policy.matrix_radius(self.width, self.height)
    }

    /// Checks that configuration defines a network with a well defined radius schedule.
    pub fn validate(&self) -> SomResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("grid size should be positive, got {}x{}", self.width, self.height).into());
        }

        if self.input_dimension == 0 {
            return Err("input dimension should be positive".into());
        }

        if self.iterations == 0 {
            return Err("amount of iterations should be positive".into());
        }

        if !self.learning_rate.is_finite() {
            return Err(format!("learning rate should be a finite number, got {}", self.learning_rate).into());
        }

        // NOTE time constant is `iterations / ln(radius)`: radius should be greater than one
        if self.width.max(self.height) <= 2 || self.matrix_radius().ln() <= 0. {
            return Err(InvalidArgument::from(format!(
                "grid {}x{} is too small: largest side should be greater than {}",
                self.width,
                self.height,
                match self.radius_policy {
                    RadiusPolicy::Exact => 2,
                    RadiusPolicy::Truncated => 3,
                }
            )));
        }

        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new(10, 10, 1, 100, 0.5)
    }
}
