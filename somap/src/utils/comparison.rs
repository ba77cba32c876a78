#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;

/// Rounds value to the given amount of decimal places.
pub fn round_to(value: Float, decimals: u32) -> Float {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
