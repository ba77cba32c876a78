#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/vector_test.rs"]
mod vector_test;

use super::squared_distance;
use crate::utils::{Float, SomResult};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Index, IndexMut};

/// An ordered sequence of real numbers: an input sample or a weight vector of the neuron.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<Float>);

impl Vector {
    /// Creates a new empty vector.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a new empty vector with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a value to the end.
    pub fn push(&mut self, value: Float) {
        self.0.push(value)
    }

    /// Returns a value at given index if it exists.
    pub fn get(&self, index: usize) -> Option<Float> {
        self.0.get(index).copied()
    }

    /// Returns a sum of squared differences to another vector of the same size.
    pub fn distance(&self, other: &Vector) -> SomResult<Float> {
        squared_distance(self.as_slice(), other.as_slice())
    }

    /// Returns values as slice.
    pub fn as_slice(&self) -> &[Float] {
        self.0.as_slice()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Float] {
        self.0.as_mut_slice()
    }
}

impl Deref for Vector {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl From<Vec<Float>> for Vector {
    fn from(values: Vec<Float>) -> Self {
        Self(values)
    }
}

impl From<&[Float]> for Vector {
    fn from(values: &[Float]) -> Self {
        Self(values.to_vec())
    }
}

impl From<Vector> for Vec<Float> {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
