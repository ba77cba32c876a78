//! Reads training vectors from csv.

#[cfg(test)]
#[path = "../../tests/unit/extensions/import_test.rs"]
mod import_test;

use somap::prelude::{Float, Vector};
use std::io::Read;

/// Reads training vectors from csv: every record is a vector, all records should have the same
/// amount of numeric values.
pub fn read_csv_inputs<R: Read>(reader: R, has_headers: bool) -> Result<Vec<Vector>, String> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(has_headers).flexible(true).trim(csv::Trim::All).from_reader(reader);

    let mut inputs: Vec<Vector> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let number = idx + 1;
        let record = record.map_err(|err| format!("cannot read record {number}: '{err}'"))?;

        let input = record
            .iter()
            .map(|cell| {
                cell.parse::<Float>().map_err(|err| format!("cannot parse value '{cell}' in record {number}: '{err}'"))
            })
            .collect::<Result<Vector, _>>()?;

        if let Some(first) = inputs.first().filter(|first| first.len() != input.len()) {
            return Err(format!("record {number} has {} values, expected {}", input.len(), first.len()));
        }

        inputs.push(input);
    }

    Ok(inputs)
}
