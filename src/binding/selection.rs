//! Selection State
//!
//! The transient per-session values of every control. A session owns exactly
//! one `SelectionState`; the HTTP API round-trips it through the client and
//! WebSocket sessions keep it in the connection task.

use super::controls::{LINE_METRICS, SCATTER_METRICS};
use super::error::{BindingError, BindingResult};
use crate::dataset::{Dataset, Metric};
use serde::{Deserialize, Serialize};

/// Current user choices on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionState {
    /// Year slider value; `None` means the earliest dataset year
    pub year: Option<i32>,
    /// Dropdown metric of the line chart
    pub line_metric: Metric,
    /// Radio metric of the scatter plot
    pub scatter_metric: Metric,
    /// Genre clicked on chart1, filtering chart2
    pub chart1_genre: Option<String>,
    /// Genre clicked on the pie chart, filtering the bar graph
    pub pie_genre: Option<String>,
    /// Genre clicked on the bar graph, filtering the pie chart
    pub bar_genre: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            year: None,
            line_metric: Metric::NaSales,
            scatter_metric: Metric::CriticCount,
            chart1_genre: None,
            pie_genre: None,
            bar_genre: None,
        }
    }
}

impl SelectionState {
    /// Year threshold to aggregate with
    pub fn year_threshold(&self, dataset: &Dataset) -> i32 {
        self.year
            .or_else(|| dataset.years().first().copied())
            .unwrap_or_default()
    }

    /// Check that each metric is one its control offers
    ///
    /// Selections arriving from clients bypass the dropdown and radio events,
    /// so they are checked here before any chart is rendered from them.
    pub fn validate(&self) -> BindingResult<()> {
        if !LINE_METRICS.contains(&self.line_metric) {
            return Err(BindingError::MetricNotOffered {
                control: "metric-dropdown",
                metric: self.line_metric,
            });
        }
        if !SCATTER_METRICS.contains(&self.scatter_metric) {
            return Err(BindingError::MetricNotOffered {
                control: "metric-radio",
                metric: self.scatter_metric,
            });
        }
        Ok(())
    }
}
