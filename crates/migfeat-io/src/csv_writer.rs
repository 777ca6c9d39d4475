//! CSV export for extracted datasets

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use migfeat_core::Dataset;
use tracing::info;

use crate::error::{IoError, IoResult};

/// Write a dataset as CSV
///
/// Header is `x0..x{n-1},y`; each subsequent record is one sample's
/// feature vector followed by its label. Every feature row must match the
/// dataset's width.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> IoResult<()> {
    let path = path.as_ref();
    let width = dataset.width().unwrap_or(0);

    let file = File::create(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let mut header: Vec<String> = (0..width).map(|i| format!("x{}", i)).collect();
    header.push("y".to_string());
    writer
        .write_record(&header)
        .map_err(|e| IoError::Write(e.to_string()))?;

    for (features, label) in dataset.features.iter().zip(&dataset.labels) {
        if features.len() != width {
            return Err(IoError::WidthMismatch {
                expected: width,
                actual: features.len(),
            });
        }
        let mut record: Vec<String> = features.iter().map(f64::to_string).collect();
        record.push(label.to_string());
        writer
            .write_record(&record)
            .map_err(|e| IoError::Write(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::Write(e.to_string()))?;
    info!("Wrote {} samples to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::default();
        dataset.push(vec![10.0, 20.0, 5.0], 3.0);
        dataset.push(vec![1.0, 2.5, 0.0], 7.0);
        dataset
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");

        write_csv(&sample_dataset(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x0,x1,x2,y");
        assert_eq!(lines[1], "10,20,5,3");
        assert_eq!(lines[2], "1,2.5,0,7");
    }

    #[test]
    fn empty_dataset_writes_label_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&Dataset::default(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "y");
    }

    #[test]
    fn ragged_rows_rejected() {
        let mut dataset = sample_dataset();
        dataset.features[1].pop();

        let dir = tempfile::tempdir().unwrap();
        let err = write_csv(&dataset, dir.path().join("bad.csv")).unwrap_err();
        assert!(matches!(
            err,
            IoError::WidthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn unwritable_path_fails_to_open() {
        let err = write_csv(&sample_dataset(), "/nonexistent/dir/out.csv").unwrap_err();
        assert!(matches!(err, IoError::OpenFailed(_)));
    }
}
