//! End-to-end feature matrix construction

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::BuilderConfig;
use crate::dataset::Dataset;
use crate::defaults::tag_averages;
use crate::error::Result;
use crate::features::{country_features, link_observations, pair_vector, LinkObservation};
use crate::labels::LabelSet;
use crate::store::MigrationStore;

/// Builds supervised-learning datasets from the migration database
///
/// Construction discovers the catalog (the country and tag universes);
/// each `build` call then extracts the feature matrix and labels for one
/// year. Index assignments and vector lengths are fixed for the builder's
/// lifetime, so repeated `build` calls against unchanged data return
/// identical datasets.
///
/// The store connection is owned by the builder and released when it is
/// dropped. All work is synchronous and single-threaded.
#[derive(Debug)]
pub struct FeatureBuilder {
    store: MigrationStore,
    config: BuilderConfig,
    catalog: Catalog,
}

impl FeatureBuilder {
    /// Validate the configuration and discover the catalog
    ///
    /// Fails fast on an invalid configuration or any discovery query
    /// failure; there are no retries.
    pub fn new(store: MigrationStore, config: BuilderConfig) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::discover(&store, &config)?;
        Ok(Self {
            store,
            config,
            catalog,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Length of every feature vector `build` emits:
    /// source features + target features + pair link features
    pub fn sample_width(&self) -> usize {
        2 * self.catalog.node_tags.len() + self.catalog.link_tags.len()
    }

    /// Extract the (X, Y) dataset for one year
    ///
    /// A sample is emitted for an ordered (source, target) pair only when
    /// the migration table holds a value for that pair and year; feature
    /// vectors are computed for all catalog pairs but unvalidated pairs
    /// are dropped. Emission follows catalog iteration order of
    /// (source, target); there is no further sorting guarantee.
    pub fn build(&self, year: i32) -> Result<Dataset> {
        let labels = LabelSet::load(&self.store, year)?;
        info!("Loaded {} migration labels for {}", labels.len(), year);

        let node_defaults = tag_averages(
            &self.store,
            &self.config.node_tables,
            &self.catalog.node_tags,
            year,
        )?;
        let link_defaults = tag_averages(
            &self.store,
            &self.config.link_tables,
            &self.catalog.link_tags,
            year,
        )?;
        debug!("Default vectors ready for {}", year);

        // Country vectors in catalog index order
        let mut by_country: Vec<Vec<f64>> = Vec::with_capacity(self.catalog.countries.len());
        for country in self.catalog.countries.keys() {
            by_country.push(country_features(
                &self.store,
                &self.config.node_tables,
                &self.catalog.node_tags,
                country,
                year,
                &node_defaults,
            )?);
            debug!("Country features ready: {}", country);
        }

        let empty: Vec<LinkObservation> = Vec::new();
        let mut dataset = Dataset::default();
        for (src_idx, source) in self.catalog.countries.keys().enumerate() {
            let observations = link_observations(
                &self.store,
                &self.config.link_tables,
                &self.catalog.countries,
                source,
                year,
            )?;

            for (tar_idx, target) in self.catalog.countries.keys().enumerate() {
                let label = match labels.get(source, target) {
                    Some(value) => value,
                    None => continue,
                };
                let pair_observations = observations.get(target).unwrap_or(&empty);
                let links = pair_vector(&self.catalog.link_tags, &link_defaults, pair_observations)?;

                let mut row = Vec::with_capacity(self.sample_width());
                row.extend_from_slice(&by_country[src_idx]);
                row.extend_from_slice(&by_country[tar_idx]);
                row.extend(links);
                dataset.push(row, label);
            }
            debug!("Source done: {}", source);
        }

        info!(
            "Built {} samples of width {} for {}",
            dataset.len(),
            self.sample_width(),
            year
        );
        if !dataset.is_empty() {
            let summary = dataset.label_summary();
            debug!(
                "Label summary for {}: mean {:.4}, min {}, max {}",
                year, summary.mean, summary.min, summary.max
            );
        }
        Ok(dataset)
    }
}
