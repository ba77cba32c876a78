//! Reads network configuration from json.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use somap::prelude::NetworkConfig;
use std::io::Read;

/// Reads network configuration. Fields which are absent get default values.
pub fn read_network_config<R: Read>(reader: R) -> Result<NetworkConfig, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize network config: '{err}'"))
}
