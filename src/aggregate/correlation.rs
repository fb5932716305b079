//! Correlation against Critic_Score
//!
//! Pearson correlation between Critic_Score and a selectable metric, with
//! pairwise exclusion of rows missing either value.

use crate::dataset::{Dataset, Metric};
use serde::Serialize;

/// Result of a correlation calculation
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Correlation {
    /// A real coefficient in [-1, 1]
    Defined {
        coefficient: f64,
        /// Number of complete pairs used
        sample_size: usize,
    },
    /// Fewer than two complete pairs, or one side has zero variance
    Undefined { sample_size: usize },
}

impl Correlation {
    /// The coefficient, if defined
    pub fn coefficient(&self) -> Option<f64> {
        match self {
            Correlation::Defined { coefficient, .. } => Some(*coefficient),
            Correlation::Undefined { .. } => None,
        }
    }

    pub fn sample_size(&self) -> usize {
        match self {
            Correlation::Defined { sample_size, .. } | Correlation::Undefined { sample_size } => {
                *sample_size
            }
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Correlation::Defined { .. })
    }
}

impl std::fmt::Display for Correlation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Correlation::Defined { coefficient, .. } => write!(f, "{:.2}", coefficient),
            Correlation::Undefined { .. } => f.write_str("undefined"),
        }
    }
}

/// Paired values for a scatter plot
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ScatterPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ScatterPoints {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// (Critic_Score, metric) pairs of every record carrying both, in dataset order
pub fn metric_pairs(dataset: &Dataset, metric: Metric) -> ScatterPoints {
    let mut points = ScatterPoints::default();

    for record in dataset.records() {
        if let (Some(score), Some(value)) = (record.critic_score, record.metric(metric)) {
            points.x.push(score);
            points.y.push(value);
        }
    }

    points
}

/// Pearson correlation between Critic_Score and `metric`
pub fn correlation_against_critic_score(dataset: &Dataset, metric: Metric) -> Correlation {
    let pairs = metric_pairs(dataset, metric);
    pearson_correlation(&pairs.x, &pairs.y)
}

/// Calculate the Pearson correlation coefficient of two aligned samples
///
/// Uses the two-pass (mean-centered) form. Returns
/// [`Correlation::Undefined`] when fewer than two pairs are given or when
/// either sample has zero variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Correlation {
    let sample_size = x.len().min(y.len());
    if sample_size < 2 {
        return Correlation::Undefined { sample_size };
    }

    let n = sample_size as f64;
    let mean_x = x[..sample_size].iter().sum::<f64>() / n;
    let mean_y = y[..sample_size].iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Correlation::Undefined { sample_size };
    }

    Correlation::Defined {
        coefficient: (cov / denominator).clamp(-1.0, 1.0),
        sample_size,
    }
}
