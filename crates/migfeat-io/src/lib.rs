//! migfeat-io - Dataset files for migration feature matrices
//!
//! Persists extracted (X, Y) datasets so a downstream training step can
//! consume them without touching the source database, and loads exported
//! files back into [`migfeat_core::Dataset`] values.
//!
//! Currently one format: CSV with header `x0..x{n-1},y`.

pub mod csv_reader;
pub mod csv_writer;
pub mod error;

pub use csv_reader::read_csv;
pub use csv_writer::write_csv;
pub use error::{IoError, IoResult};
