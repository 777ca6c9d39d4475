//! Builder configuration
//!
//! Which tables feed catalog discovery and extraction, and how frequent a
//! country must be to enter the catalog.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};
use crate::store::{SourceTable, TableKind};

/// Configuration for catalog discovery and feature extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Row count a country must strictly exceed, summed across the node
    /// tables, to enter the catalog
    pub country_threshold: i64,
    /// Tables holding per-country (country, value, tag, year) rows, queried
    /// in the given order
    pub node_tables: Vec<SourceTable>,
    /// Tables holding per-pair (country1, country2, value, tag, year) rows
    pub link_tables: Vec<SourceTable>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            country_threshold: 1000,
            node_tables: vec![SourceTable::Node, SourceTable::Hua],
            link_tables: vec![SourceTable::Link],
        }
    }
}

impl BuilderConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.country_threshold < 0 {
            return Err(FeatureError::Config(
                "country_threshold must be non-negative".to_string(),
            ));
        }
        if self.node_tables.is_empty() {
            return Err(FeatureError::Config(
                "node_tables must not be empty".to_string(),
            ));
        }
        if self.link_tables.is_empty() {
            return Err(FeatureError::Config(
                "link_tables must not be empty".to_string(),
            ));
        }
        for table in &self.node_tables {
            if table.kind() != TableKind::Node {
                return Err(FeatureError::Config(format!(
                    "{} is not a node-shaped table",
                    table.name()
                )));
            }
        }
        for table in &self.link_tables {
            if table.kind() != TableKind::Link {
                return Err(FeatureError::Config(format!(
                    "{} is not a link-shaped table",
                    table.name()
                )));
            }
        }
        Ok(())
    }
}
