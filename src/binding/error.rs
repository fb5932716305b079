//! Binding error types
//!
//! Errors raised while applying a UI event to a selection.

use crate::dataset::Metric;
use thiserror::Error;

/// Errors that can occur while handling UI events
#[derive(Error, Debug, PartialEq)]
pub enum BindingError {
    /// Metric name is not a dataset column
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Metric exists but the control does not offer it
    #[error("Metric {metric} is not an option of {control}")]
    MetricNotOffered {
        control: &'static str,
        metric: Metric,
    },
}

/// Result type for binding operations
pub type BindingResult<T> = Result<T, BindingError>;
