//! migfeat-core - Feature matrices from relational migration data
//!
//! This crate assembles supervised-learning datasets from a relational
//! store of country, indicator, and migration tables: for every ordered
//! pair of countries in a requested year it emits one fixed-length numeric
//! feature vector (source-country features, target-country features,
//! directed link features) paired with the observed migration count.
//!
//! - **Store**: read-only SQLite access; parameterized queries with
//!   allow-listed table identifiers
//! - **Catalog**: threshold-filtered country universe plus node/link tag
//!   universes with stable, insertion-ordered index assignment
//! - **Defaults**: year-scoped per-tag mean vectors (stored year 0 means
//!   year-independent)
//! - **Features**: per-country vectors and bulk per-source link retrieval,
//!   defaults overwritten by explicit rows, last write wins
//! - **Labels**: ground-truth (source, target) → migration count oracle
//! - **Builder**: catalog discovery at construction, per-year extraction
//!   joining features with labels into a [`Dataset`]
//!
//! # Example
//!
//! ```no_run
//! use migfeat_core::{BuilderConfig, FeatureBuilder, MigrationStore};
//!
//! # fn main() -> migfeat_core::Result<()> {
//! let store = MigrationStore::open("migration.db")?;
//! let builder = FeatureBuilder::new(store, BuilderConfig::default())?;
//! let dataset = builder.build(2015)?;
//! assert_eq!(dataset.features.len(), dataset.labels.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod features;
pub mod labels;
pub mod store;
pub mod summary;

pub use builder::FeatureBuilder;
pub use catalog::{Catalog, Index};
pub use config::BuilderConfig;
pub use dataset::Dataset;
pub use error::{FeatureError, Result};
pub use features::LinkObservation;
pub use labels::LabelSet;
pub use store::{MigrationStore, SourceTable, TableKind};
pub use summary::SummaryStats;
