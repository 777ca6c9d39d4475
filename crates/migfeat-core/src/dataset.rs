//! The assembled (X, Y) output

use crate::summary::SummaryStats;

/// Feature matrix plus matching labels
///
/// `features[i]` is the fixed-length numeric vector for sample `i`
/// (source-country features, target-country features, pair link features,
/// concatenated in that order); `labels[i]` is the observed migration
/// count for the same ordered pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Width of the feature vectors, if any samples exist
    pub fn width(&self) -> Option<usize> {
        self.features.first().map(Vec::len)
    }

    /// Append one sample
    pub fn push(&mut self, features: Vec<f64>, label: f64) {
        self.features.push(features);
        self.labels.push(label);
    }

    /// Summary statistics over the labels
    pub fn label_summary(&self) -> SummaryStats {
        SummaryStats::from_data(&self.labels)
    }
}
