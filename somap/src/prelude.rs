//! This module reimports a common used types.

pub use crate::algorithms::math::Vector;

pub use crate::algorithms::som::Coordinate;
pub use crate::algorithms::som::Network;
pub use crate::algorithms::som::NetworkConfig;
pub use crate::algorithms::som::NetworkState;
pub use crate::algorithms::som::Neuron;
pub use crate::algorithms::som::RadiusPolicy;
pub use crate::algorithms::som::TelemetryMode;
pub use crate::algorithms::som::TrainingSummary;
pub use crate::algorithms::som::get_network_state;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::InvalidArgument;
pub use crate::utils::Parallelism;
pub use crate::utils::Quota;
pub use crate::utils::Random;
pub use crate::utils::SomResult;
