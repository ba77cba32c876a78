#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::{Float, InvalidArgument, SomResult};

/// Calculates a sum of squared differences between two vectors of the same size.
///
/// NOTE the square root is not taken: the map compares and decays everything relative to this
/// squared quantity, so it is not the true euclidean norm.
pub fn squared_distance(a: &[Float], b: &[Float]) -> SomResult<Float> {
    if a.len() != b.len() {
        return Err(InvalidArgument::size_mismatch("distance", a.len(), b.len()));
    }

    Ok(a.iter().zip(b.iter()).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    }))
}
