#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/neuron_test.rs"]
mod neuron_test;

use super::Coordinate;
use crate::algorithms::math::{Vector, squared_distance};
use crate::utils::{Float, InvalidArgument, Random, SomResult};

/// Represents a neuron (grid cell) of the map.
#[derive(Clone, Debug)]
pub struct Neuron {
    coordinate: Coordinate,
    weights: Vector,
    total_hits: usize,
}

impl Neuron {
    /// Creates a new instance of `Neuron` at (0, 0) with `dimension` weights drawn uniformly
    /// from [0, 1).
    pub fn new(dimension: usize, random: &dyn Random) -> Self {
        let weights = (0..dimension).map(|_| random.uniform_real(0., 1.)).collect();

        Self { coordinate: Coordinate::default(), weights, total_hits: 0 }
    }

    /// Places the neuron at given grid coordinate.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = coordinate;
        self
    }

    /// Returns neuron's coordinate in the grid.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns weight vector.
    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    /// Returns dimension of the weight vector.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Returns how many times the neuron was selected as best matching unit during last training.
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// Returns squared distance to another neuron in grid coordinates.
    pub fn planar_distance(&self, other: &Neuron) -> Float {
        self.coordinate.planar_distance(&other.coordinate)
    }

    /// Returns a sum of squared differences between the input and neuron's weights.
    pub fn distance(&self, input: &[Float]) -> SomResult<Float> {
        squared_distance(input, self.weights.as_slice())
    }

    /// Gets weight at given index.
    pub fn get_weight(&self, index: usize) -> SomResult<Float> {
        self.weights.get(index).ok_or_else(|| InvalidArgument::out_of_range("weight", index, self.dimension()))
    }

    /// Sets weight at given index.
    pub fn set_weight(&mut self, index: usize, value: Float) -> SomResult<()> {
        if index >= self.dimension() {
            return Err(InvalidArgument::out_of_range("weight", index, self.dimension()));
        }

        self.weights[index] = value;

        Ok(())
    }

    /// Moves weights towards the input: `w += learning_rate * distance_drop * (input - w)`.
    /// Both factors enter multiplicatively, so their order does not change the result.
    pub fn update_weights(&mut self, input: &[Float], learning_rate: Float, distance_drop: Float) -> SomResult<()> {
        if input.len() != self.dimension() {
            return Err(InvalidArgument::size_mismatch("neuron update", self.dimension(), input.len()));
        }

        self.adjust(input, learning_rate, distance_drop);

        Ok(())
    }

    pub(crate) fn adjust(&mut self, input: &[Float], learning_rate: Float, distance_drop: Float) {
        debug_assert!(self.weights.len() == input.len());

        self.weights.as_mut_slice().iter_mut().zip(input.iter()).for_each(|(weight, value)| {
            *weight += learning_rate * distance_drop * (*value - *weight);
        });
    }

    pub(crate) fn new_hit(&mut self) {
        self.total_hits += 1;
    }

    pub(crate) fn reset_hits(&mut self) {
        self.total_hits = 0;
    }
}
