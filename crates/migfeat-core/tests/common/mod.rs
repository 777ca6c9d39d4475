//! Shared database fixtures for integration tests

use migfeat_core::{BuilderConfig, FeatureBuilder, MigrationStore};
use rusqlite::{params, Connection};

/// In-memory database with the full schema and no rows
pub fn empty_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE node (country TEXT, value TEXT, tag TEXT, year INTEGER);
         CREATE TABLE hua (country TEXT, value TEXT, tag TEXT, year INTEGER);
         CREATE TABLE link (country1 TEXT, country2 TEXT, value TEXT, tag TEXT, year INTEGER);
         CREATE TABLE migration (source TEXT, target TEXT, value REAL, year INTEGER);",
    )
    .unwrap();
    conn
}

pub fn insert_indicator(
    conn: &Connection,
    table: &str,
    country: &str,
    value: &str,
    tag: &str,
    year: i32,
) {
    assert!(table == "node" || table == "hua");
    conn.execute(
        &format!("INSERT INTO {} VALUES (?1, ?2, ?3, ?4)", table),
        params![country, value, tag, year],
    )
    .unwrap();
}

pub fn insert_link(
    conn: &Connection,
    country1: &str,
    country2: &str,
    value: &str,
    tag: &str,
    year: i32,
) {
    conn.execute(
        "INSERT INTO link VALUES (?1, ?2, ?3, ?4, ?5)",
        params![country1, country2, value, tag, year],
    )
    .unwrap();
}

pub fn insert_migration(conn: &Connection, source: &str, target: &str, value: f64, year: i32) {
    conn.execute(
        "INSERT INTO migration VALUES (?1, ?2, ?3, ?4)",
        params![source, target, value, year],
    )
    .unwrap();
}

/// Builder over `conn` with the given country threshold and default tables
pub fn builder_with_threshold(conn: Connection, threshold: i64) -> FeatureBuilder {
    let config = BuilderConfig {
        country_threshold: threshold,
        ..Default::default()
    };
    FeatureBuilder::new(MigrationStore::from_connection(conn), config).unwrap()
}
