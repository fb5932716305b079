//! Dashboard Controls
//!
//! Option lists and defaults of the dashboard controls, and the grouping of
//! charts into tabs. The UI host builds its widgets from [`Controls`].

use super::selection::SelectionState;
use crate::chart::ChartId;
use crate::dataset::{Dataset, Metric};
use serde::Serialize;

/// Metrics offered by the line chart dropdown
pub const LINE_METRICS: [Metric; 3] = [Metric::NaSales, Metric::EuSales, Metric::JpSales];

/// Metrics offered by the scatter plot radio
pub const SCATTER_METRICS: [Metric; 3] = [Metric::CriticCount, Metric::UserScore, Metric::GlobalSales];

/// Dashboard title
pub const DASHBOARD_TITLE: &str = "Analysis of Video Game Sales";

/// Everything the UI host needs to build its controls
#[derive(Debug, Clone, Serialize)]
pub struct Controls {
    pub title: String,
    pub year_slider: SliderControl,
    pub metric_dropdown: ChoiceControl,
    pub metric_radio: ChoiceControl,
    pub tabs: Vec<Tab>,
}

/// Year slider range; one mark per dataset year
#[derive(Debug, Clone, Serialize)]
pub struct SliderControl {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub value: i32,
    pub marks: Vec<i32>,
}

/// A single-choice control over metrics
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceControl {
    pub options: Vec<Metric>,
    pub value: Metric,
}

/// A dashboard tab and the charts it holds
#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub label: &'static str,
    pub charts: Vec<ChartId>,
}

impl Controls {
    /// Derive control settings from the dataset and the default selection
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let defaults = SelectionState::default();
        let years = dataset.years();
        let min = years.first().copied().unwrap_or_default();
        let max = years.last().copied().unwrap_or(min);

        Self {
            title: DASHBOARD_TITLE.to_string(),
            year_slider: SliderControl {
                min,
                max,
                step: 1,
                value: defaults.year_threshold(dataset),
                marks: years,
            },
            metric_dropdown: ChoiceControl {
                options: LINE_METRICS.to_vec(),
                value: defaults.line_metric,
            },
            metric_radio: ChoiceControl {
                options: SCATTER_METRICS.to_vec(),
                value: defaults.scatter_metric,
            },
            tabs: tabs(),
        }
    }
}

fn tabs() -> Vec<Tab> {
    vec![
        Tab {
            label: "Sales by Year",
            charts: vec![ChartId::LineChart],
        },
        Tab {
            label: "Critic Score Correlation",
            charts: vec![ChartId::ScatterPlot],
        },
        Tab {
            label: "Genre Drill-down",
            charts: vec![ChartId::Chart1, ChartId::Chart2],
        },
        Tab {
            label: "Genre and Rating",
            charts: vec![ChartId::PieChart, ChartId::BarGraph],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::GameRecord;

    #[test]
    fn test_controls_follow_dataset_years() {
        let dataset = Dataset::new(vec![
            GameRecord::new(2010, "Action"),
            GameRecord::new(2000, "Action"),
            GameRecord::new(2005, "Sports"),
        ]);

        let controls = Controls::for_dataset(&dataset);
        assert_eq!(controls.year_slider.min, 2000);
        assert_eq!(controls.year_slider.max, 2010);
        assert_eq!(controls.year_slider.value, 2000);
        assert_eq!(controls.year_slider.marks, vec![2000, 2005, 2010]);
        assert_eq!(controls.metric_dropdown.value, Metric::NaSales);
        assert!(controls.metric_radio.options.contains(&controls.metric_radio.value));
    }

    #[test]
    fn test_every_chart_in_one_tab() {
        let mut charts: Vec<ChartId> = tabs().into_iter().flat_map(|t| t.charts).collect();
        charts.sort();
        let mut all = ChartId::all().to_vec();
        all.sort();
        assert_eq!(charts, all);
    }
}
