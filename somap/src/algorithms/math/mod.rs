//! This module contains numeric vector type and distance functions used by the map.

mod distance;
pub use self::distance::*;

mod vector;
pub use self::vector::*;
