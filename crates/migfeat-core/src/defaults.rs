//! Year-scoped default vectors
//!
//! The baseline vector for a year holds, per tag index, the arithmetic
//! mean of every value stored under that tag with year 0 (year-independent)
//! or the requested year. Tables are processed independently in
//! configuration order and each table's per-tag mean overwrites the slot,
//! so a tag present in several tables keeps the mean from the last table
//! processed. Tags with no observations stay 0.0.

use std::collections::HashMap;

use crate::catalog::Index;
use crate::error::Result;
use crate::features::parse_value;
use crate::store::{MigrationStore, SourceTable};

/// Mean value per tag index for `year`, one slot per index entry
pub fn tag_averages(
    store: &MigrationStore,
    tables: &[SourceTable],
    index: &Index,
    year: i32,
) -> Result<Vec<f64>> {
    let mut averages = vec![0.0; index.len()];

    for &table in tables {
        let mut sums: HashMap<usize, (f64, u64)> = HashMap::new();
        for (tag, value) in store.tag_values(table, year)? {
            // Tags outside the index are skipped here
            if let Some(idx) = index.get(&tag) {
                let parsed = parse_value(&value, &tag)?;
                let entry = sums.entry(idx).or_insert((0.0, 0));
                entry.0 += parsed;
                entry.1 += 1;
            }
        }
        for (idx, (sum, count)) in sums {
            averages[idx] = sum / count as f64;
        }
    }

    Ok(averages)
}
