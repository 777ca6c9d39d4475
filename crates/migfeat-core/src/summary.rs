//! Summary statistics for extracted labels

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/non-finite values
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = finite;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Self {
            count,
            missing,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
            median,
        }
    }

    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
        }
    }
}
