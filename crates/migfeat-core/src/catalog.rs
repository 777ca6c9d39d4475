//! Catalog discovery: the country and tag universes
//!
//! The catalog fixes the index space for every vector the builder emits.
//! It is built once, before any extraction, and never changes for the
//! lifetime of a builder instance.

use std::collections::HashMap;

use tracing::info;

use crate::config::BuilderConfig;
use crate::error::Result;
use crate::store::{CountColumn, MigrationStore, SourceTable};

/// Insertion-ordered index assignment
///
/// Keys receive consecutive zero-based indices in the order they are first
/// inserted. The assignment is deterministic within one instance; absolute
/// index values are implementation-defined and not part of any contract.
#[derive(Debug, Clone, Default)]
pub struct Index {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning its index; an existing key keeps its index
    pub fn insert(&mut self, key: &str) -> usize {
        if let Some(&idx) = self.positions.get(key) {
            return idx;
        }
        let idx = self.keys.len();
        self.keys.push(key.to_string());
        self.positions.insert(key.to_string(), idx);
        idx
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in index order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// The discovered universes: threshold-filtered countries plus tag indices
///
/// Countries enter only when their summed row count across the node-like
/// tables strictly exceeds the configured threshold; tags are indexed
/// unconditionally. `node_tags.len()` fixes the length of every country
/// vector, `link_tags.len()` the length of every pair vector.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub countries: Index,
    pub node_tags: Index,
    pub link_tags: Index,
}

impl Catalog {
    /// Discover the catalog from row counts
    pub fn discover(store: &MigrationStore, config: &BuilderConfig) -> Result<Self> {
        let mut countries = Index::new();
        for (country, count) in merged_counts(store, &config.node_tables, CountColumn::Country)? {
            if count > config.country_threshold {
                countries.insert(&country);
            }
        }
        info!(
            "Found {} countries above threshold {}",
            countries.len(),
            config.country_threshold
        );

        let mut node_tags = Index::new();
        for (tag, _) in merged_counts(store, &config.node_tables, CountColumn::Tag)? {
            node_tags.insert(&tag);
        }

        let mut link_tags = Index::new();
        for (tag, _) in merged_counts(store, &config.link_tables, CountColumn::Tag)? {
            link_tags.insert(&tag);
        }
        info!(
            "Found {} node tags and {} link tags",
            node_tags.len(),
            link_tags.len()
        );

        Ok(Self {
            countries,
            node_tags,
            link_tags,
        })
    }
}

/// Sum per-key row counts across tables, preserving first-encounter order
fn merged_counts(
    store: &MigrationStore,
    tables: &[SourceTable],
    column: CountColumn,
) -> Result<Vec<(String, i64)>> {
    let mut order = Index::new();
    let mut totals: Vec<i64> = Vec::new();

    for &table in tables {
        for (key, count) in store.group_counts(table, column)? {
            let idx = order.insert(&key);
            if idx == totals.len() {
                totals.push(0);
            }
            totals[idx] += count;
        }
    }

    Ok(order.keys().map(str::to_owned).zip(totals).collect())
}
