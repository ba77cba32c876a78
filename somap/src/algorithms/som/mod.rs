//! Provides an implementation of a rectangular Self-Organizing Map (Kohonen map).
//!
//! The map is a dense `width x height` grid of neurons, each holding a weight vector of the same
//! dimension as the input data. Training runs a fixed amount of iterations over the input
//! sequence: for every input the best matching unit (BMU) is found and neurons within
//! a decaying neighborhood radius around it are pulled towards the input with a decaying
//! learning rate.

use crate::utils::Float;
use serde::{Deserialize, Serialize};

mod config;
pub use self::config::*;

mod network;
pub use self::network::*;

mod neuron;
pub use self::neuron::*;

mod state;
pub use self::state::*;

mod telemetry;
pub use self::telemetry::*;

/// Coordinate of the neuron in the grid as (x, y).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate(pub usize, pub usize);

impl Coordinate {
    /// Creates a coordinate from a row-major flat index in a grid of given height.
    pub fn from_index(index: usize, height: usize) -> Self {
        Self(index / height, index % height)
    }

    /// Returns a row-major flat index in a grid of given height.
    pub fn to_index(&self, height: usize) -> usize {
        self.0 * height + self.1
    }

    /// Returns squared euclidean distance between two grid positions.
    pub fn planar_distance(&self, other: &Coordinate) -> Float {
        let dx = self.0 as Float - other.0 as Float;
        let dy = self.1 as Float - other.1 as Float;

        dx * dx + dy * dy
    }
}
