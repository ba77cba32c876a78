//! This crate implements a rectangular Self-Organizing Map (Kohonen map) trained with the classic
//! sequential algorithm: random grid initialization, best matching unit search, exponentially
//! decaying neighborhood radius and learning rate, and a localized weight update.
//!
//! # Examples
//!
//! ```
//! use somap::prelude::*;
//!
//! let mut network = Network::with_defaults(5, 5, 2, 10, 0.5).unwrap();
//! let inputs = vec![Vector::from(vec![0.1, 0.2]), Vector::from(vec![0.9, 0.8])];
//!
//! let summary = network.train(inputs.as_slice()).unwrap();
//!
//! assert_eq!(summary.iterations, 10);
//! assert_eq!(network.get_neuron(4, 4).unwrap().weights().len(), 2);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
