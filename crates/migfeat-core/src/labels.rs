//! Ground-truth migration labels

use std::collections::HashMap;

use crate::error::Result;
use crate::store::MigrationStore;

/// Observed migration counts for one year, keyed by (source, target)
///
/// Duplicate keys overwrite in query result order (last wins). Sample
/// assembly uses this purely as a membership and lookup oracle: a pair
/// without an entry here produces no sample.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    values: HashMap<(String, String), f64>,
}

impl LabelSet {
    /// Load all labels recorded for `year`
    pub fn load(store: &MigrationStore, year: i32) -> Result<Self> {
        let mut values = HashMap::new();
        for (source, target, value) in store.migration_values(year)? {
            values.insert((source, target), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, source: &str, target: &str) -> Option<f64> {
        self.values
            .get(&(source.to_string(), target.to_string()))
            .copied()
    }

    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.get(source, target).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
