//! Writes trained network state.

#[cfg(test)]
#[path = "../../tests/unit/extensions/export_test.rs"]
mod export_test;

use somap::prelude::{Network, get_network_state};
use std::io::Write;

/// Writes network state as pretty printed json.
pub fn write_network_state<W: Write>(mut writer: W, network: &Network) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, &get_network_state(network))
        .map_err(|err| format!("cannot write network state: '{err}'"))?;

    writer.flush().map_err(|err| format!("cannot flush network state: '{err}'"))
}
