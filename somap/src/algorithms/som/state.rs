#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Represents state of the network.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkState {
    /// Amount of neurons along x axis.
    pub width: usize,
    /// Amount of neurons along y axis.
    pub height: usize,
    /// Dimension of weights.
    pub dimension: usize,
    /// Neurons of the network in row-major order.
    pub neurons: Vec<NeuronState>,
}

/// Contains information about network neuron state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeuronState {
    /// Neuron coordinate in network.
    pub coordinate: (usize, usize),
    /// Mean weight distance to direct neighbors (a cell of the unified distance matrix).
    pub unified_distance: Float,
    /// Neuron weights.
    pub weights: Vec<Float>,
    /// How many times neuron was selected as best matching unit during last training.
    pub total_hits: usize,
}

/// Gets network state.
pub fn get_network_state(network: &Network) -> NetworkState {
    let (width, height) = (network.width(), network.height());

    let neurons = network
        .neurons()
        .map(|neuron| {
            let Coordinate(x, y) = neuron.coordinate();

            let neighbours = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .into_iter()
                .filter_map(|(dx, dy): (isize, isize)| {
                    let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
                    let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;

                    network.get_neuron(nx, ny).ok()
                })
                .filter_map(|other| neuron.distance(other.weights()).ok())
                .collect::<Vec<_>>();

            let unified_distance = if neighbours.is_empty() {
                0.
            } else {
                neighbours.iter().sum::<Float>() / neighbours.len() as Float
            };

            NeuronState {
                coordinate: (x, y),
                unified_distance,
                weights: neuron.weights().to_vec(),
                total_hits: neuron.total_hits(),
            }
        })
        .collect();

    NetworkState { width, height, dimension: network.dimension(), neurons }
}
