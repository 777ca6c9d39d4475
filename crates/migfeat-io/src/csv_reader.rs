//! CSV import for previously exported datasets

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use migfeat_core::Dataset;

use crate::error::{IoError, IoResult};

/// Load a dataset written by [`crate::csv_writer::write_csv`]
///
/// Expects a header whose last column is the label; every other column is
/// a feature. All fields must parse as finite-precision floats.
pub fn read_csv(path: impl AsRef<Path>) -> IoResult<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;
    if headers.is_empty() {
        return Err(IoError::InvalidFormat("missing header row".to_string()));
    }
    let width = headers.len() - 1;

    let mut dataset = Dataset::default();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        if record.len() != width + 1 {
            return Err(IoError::WidthMismatch {
                expected: width + 1,
                actual: record.len(),
            });
        }

        let mut fields = Vec::with_capacity(width + 1);
        for field in record.iter() {
            let value: f64 = field
                .parse()
                .map_err(|_| IoError::InvalidFormat(format!("non-numeric field {:?}", field)))?;
            fields.push(value);
        }
        let label = fields.pop().unwrap_or(0.0);
        dataset.push(fields, label);
    }

    Ok(dataset)
}
