//! This module contains implementations of the map training algorithm and its math helpers.

pub mod math;
pub mod som;
