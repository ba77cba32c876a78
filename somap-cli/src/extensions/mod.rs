//! Contains extensions used by the command line interface.

pub mod config;
pub mod export;
pub mod import;
pub mod interruption;
