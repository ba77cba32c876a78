//! A Self-Organizing Map trainer public API: reading inputs, configuration and writing results.

#![warn(missing_docs)]

pub mod extensions;

pub use somap;
