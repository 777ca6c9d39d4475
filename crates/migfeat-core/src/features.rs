//! Per-country and per-pair feature retrieval
//!
//! Country vectors start from the node default vector and are overwritten
//! by the country's own rows; pair vectors start from the link default
//! vector and are overwritten by the pair's observations. Within one
//! vector, later rows win (query result order).

use std::collections::HashMap;

use crate::catalog::Index;
use crate::error::{FeatureError, Result};
use crate::store::{MigrationStore, SourceTable};

/// A raw (value, tag) observation on a directed link
///
/// The value is kept as stored text and parsed when the owning pair is
/// assembled into a sample.
#[derive(Debug, Clone)]
pub struct LinkObservation {
    pub value: String,
    pub tag: String,
}

/// Parse a stored decimal field strictly
///
/// Whitespace is tolerated; anything else non-numeric aborts the current
/// extraction rather than silently defaulting.
pub(crate) fn parse_value(value: &str, tag: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| FeatureError::Parse {
        value: value.to_string(),
        tag: tag.to_string(),
    })
}

/// Feature vector for one country: the defaults overwritten by the
/// country's explicit yearly or year-independent rows
pub fn country_features(
    store: &MigrationStore,
    tables: &[SourceTable],
    node_tags: &Index,
    country: &str,
    year: i32,
    defaults: &[f64],
) -> Result<Vec<f64>> {
    let mut features = defaults.to_vec();
    for &table in tables {
        for (value, tag) in store.country_values(table, country, year)? {
            let idx = node_tags
                .get(&tag)
                .ok_or_else(|| FeatureError::UnknownTag(tag.clone()))?;
            features[idx] = parse_value(&value, &tag)?;
        }
    }
    Ok(features)
}

/// All link observations leaving `source`, bucketed by target country
///
/// One bulk query per link table; rows whose target is not in the catalog
/// are dropped. Every catalog country gets an entry, observed or not.
pub fn link_observations(
    store: &MigrationStore,
    tables: &[SourceTable],
    countries: &Index,
    source: &str,
    year: i32,
) -> Result<HashMap<String, Vec<LinkObservation>>> {
    let mut by_target: HashMap<String, Vec<LinkObservation>> = countries
        .keys()
        .map(|c| (c.to_string(), Vec::new()))
        .collect();

    for &table in tables {
        for (target, value, tag) in store.link_values(table, source, year)? {
            if let Some(observations) = by_target.get_mut(&target) {
                observations.push(LinkObservation { value, tag });
            }
        }
    }

    Ok(by_target)
}

/// Pair link vector: the link defaults overwritten at each observed tag
pub fn pair_vector(
    link_tags: &Index,
    defaults: &[f64],
    observations: &[LinkObservation],
) -> Result<Vec<f64>> {
    let mut vector = defaults.to_vec();
    for obs in observations {
        let idx = link_tags
            .get(&obs.tag)
            .ok_or_else(|| FeatureError::UnknownTag(obs.tag.clone()))?;
        vector[idx] = parse_value(&obs.value, &obs.tag)?;
    }
    Ok(vector)
}
