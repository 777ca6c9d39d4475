//! SQLite access to the migration database
//!
//! `MigrationStore` owns the single connection for the builder's lifetime
//! and exposes one method per query shape. Every value predicate is a bound
//! parameter; table identifiers cannot be bound, so they only enter SQL
//! through the closed `SourceTable` enum.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};
use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// Tables the store is allowed to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTable {
    /// Per-country indicator rows: (country, value, tag, year)
    Node,
    /// Per-country indicator rows from the HUA source: same shape as `Node`
    Hua,
    /// Directed pair rows: (country1, country2, value, tag, year)
    Link,
}

/// Column shape of a source table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Keyed by a single `country` column
    Node,
    /// Keyed by a `country1`/`country2` pair
    Link,
}

impl SourceTable {
    /// SQL identifier for this table
    pub fn name(&self) -> &'static str {
        match self {
            SourceTable::Node => "node",
            SourceTable::Hua => "hua",
            SourceTable::Link => "link",
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            SourceTable::Node | SourceTable::Hua => TableKind::Node,
            SourceTable::Link => TableKind::Link,
        }
    }
}

/// Columns catalog discovery can group by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountColumn {
    Country,
    Tag,
}

impl CountColumn {
    fn name(&self) -> &'static str {
        match self {
            CountColumn::Country => "country",
            CountColumn::Tag => "tag",
        }
    }
}

/// Read-only handle to the migration database
///
/// Opened once and dropped deterministically with its owner. All operations
/// are blocking reads; there is no pooling, reconnection, or transaction
/// handling.
#[derive(Debug)]
pub struct MigrationStore {
    conn: Connection,
}

impl MigrationStore {
    /// Open an existing database read-only
    ///
    /// Fails fast with [`FeatureError::Connection`]; there are no retries.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| FeatureError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Wrap an externally prepared connection
    ///
    /// Callers that assemble their own database (tests, in-memory setups)
    /// hand the connection over here; the store takes ownership.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Row counts grouped by `column`, in result order
    pub fn group_counts(
        &self,
        table: SourceTable,
        column: CountColumn,
    ) -> Result<Vec<(String, i64)>> {
        let sql = format!(
            "SELECT {col}, COUNT(1) FROM {table} GROUP BY {col}",
            col = column.name(),
            table = table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// All (tag, value) rows applicable to `year`
    ///
    /// Stored year 0 marks a year-independent row and always matches.
    pub fn tag_values(&self, table: SourceTable, year: i32) -> Result<Vec<(String, String)>> {
        let sql = format!(
            "SELECT tag, value FROM {} WHERE year = 0 OR year = ?1",
            table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![year], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// (value, tag) rows for one country, in result order
    pub fn country_values(
        &self,
        table: SourceTable,
        country: &str,
        year: i32,
    ) -> Result<Vec<(String, String)>> {
        let sql = format!(
            "SELECT value, tag FROM {} WHERE country = ?1 AND (year = 0 OR year = ?2)",
            table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![country, year], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// (country2, value, tag) rows leaving `source`
    ///
    /// One bulk call per source country; pair retrieval never issues a
    /// query per (source, target) pair.
    pub fn link_values(
        &self,
        table: SourceTable,
        source: &str,
        year: i32,
    ) -> Result<Vec<(String, String, String)>> {
        let sql = format!(
            "SELECT country2, value, tag FROM {} WHERE country1 = ?1 AND (year = 0 OR year = ?2)",
            table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![source, year], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// (source, target, value) ground-truth rows recorded for `year`
    pub fn migration_values(&self, year: i32) -> Result<Vec<(String, String, f64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT source, target, value FROM migration WHERE year = ?1")?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
