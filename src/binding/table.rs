//! Wiring Table and Dispatcher
//!
//! The static table of which trigger refreshes which chart, and the
//! dispatcher that applies an event to a selection and recomputes the bound
//! charts.
//!
//! ```text
//! UiEvent → update SelectionState → BINDINGS lookup → aggregate → build ChartSpec
//! ```

use super::controls::{LINE_METRICS, SCATTER_METRICS};
use super::error::{BindingError, BindingResult};
use super::events::{extract_category, ClickField, Trigger, UiEvent};
use super::selection::SelectionState;
use crate::aggregate;
use crate::chart::{self, ChartId, ChartSpec};
use crate::dataset::{Dataset, Metric};
use serde::Serialize;
use std::sync::Arc;

/// Recompute one chart from the dataset and the current selection
pub type RefreshFn = fn(&Dataset, &SelectionState) -> ChartSpec;

/// One row of the wiring table
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub trigger: Trigger,
    pub target: ChartId,
    /// Aggregation invoked, for logs
    pub aggregation: &'static str,
}

/// Trigger → target wiring
pub static BINDINGS: [Binding; 6] = [
    Binding {
        trigger: Trigger::YearSlider,
        target: ChartId::LineChart,
        aggregation: "sales_by_year_up_to",
    },
    Binding {
        trigger: Trigger::MetricDropdown,
        target: ChartId::LineChart,
        aggregation: "sales_by_year_up_to",
    },
    Binding {
        trigger: Trigger::MetricRadio,
        target: ChartId::ScatterPlot,
        aggregation: "correlation_against_critic_score",
    },
    Binding {
        trigger: Trigger::Click(ChartId::Chart1),
        target: ChartId::Chart2,
        aggregation: "mean_score_and_sales_by_year_for_genre",
    },
    Binding {
        trigger: Trigger::Click(ChartId::PieChart),
        target: ChartId::BarGraph,
        aggregation: "rating_distribution_for_genre",
    },
    Binding {
        trigger: Trigger::Click(ChartId::BarGraph),
        target: ChartId::PieChart,
        aggregation: "genre_rating_cross_tabulation",
    },
];

/// The full wiring table
pub fn bindings() -> impl Iterator<Item = &'static Binding> {
    BINDINGS.iter()
}

/// Bindings fired by a trigger
pub fn bindings_for(trigger: Trigger) -> impl Iterator<Item = &'static Binding> {
    bindings().filter(move |b| b.trigger == trigger)
}

/// Refresh function of a chart
pub fn refresh_fn(chart: ChartId) -> RefreshFn {
    match chart {
        ChartId::LineChart => refresh_line_chart,
        ChartId::ScatterPlot => refresh_scatter_plot,
        ChartId::Chart1 => refresh_chart1,
        ChartId::Chart2 => refresh_chart2,
        ChartId::PieChart => refresh_pie_chart,
        ChartId::BarGraph => refresh_bar_graph,
    }
}

fn refresh_line_chart(dataset: &Dataset, selection: &SelectionState) -> ChartSpec {
    let year = selection.year_threshold(dataset);
    let series = aggregate::sales_by_year_up_to(dataset, selection.line_metric, year);
    chart::sales_line_chart(&series, selection.line_metric, year)
}

fn refresh_scatter_plot(dataset: &Dataset, selection: &SelectionState) -> ChartSpec {
    let metric = selection.scatter_metric;
    let points = aggregate::metric_pairs(dataset, metric);
    let correlation = aggregate::correlation_against_critic_score(dataset, metric);
    chart::correlation_scatter(&points, metric, correlation)
}

fn refresh_chart1(dataset: &Dataset, _selection: &SelectionState) -> ChartSpec {
    chart::critic_score_bar(&aggregate::critic_score_by_genre(dataset))
}

fn refresh_chart2(dataset: &Dataset, selection: &SelectionState) -> ChartSpec {
    match selection.chart1_genre.as_deref() {
        None => chart::genre_score_scatter(&aggregate::critic_scores_with_genre(dataset)),
        Some(genre) => chart::genre_trend_chart(&aggregate::mean_score_and_sales_by_year_for_genre(
            dataset, genre,
        )),
    }
}

fn refresh_bar_graph(dataset: &Dataset, selection: &SelectionState) -> ChartSpec {
    let distribution =
        aggregate::rating_distribution_for_genre(dataset, selection.pie_genre.as_deref());
    chart::rating_bar_graph(&distribution, &dataset.ratings())
}

fn refresh_pie_chart(dataset: &Dataset, selection: &SelectionState) -> ChartSpec {
    let genre = selection.bar_genre.as_deref();
    let entries = aggregate::genre_rating_cross_tabulation(dataset, genre);
    chart::cross_tab_pie(&entries, genre)
}

/// A recomputed chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartUpdate {
    pub target: ChartId,
    pub figure: ChartSpec,
}

/// Applies UI events against one shared, read-only dataset
#[derive(Debug, Clone)]
pub struct Dispatcher {
    dataset: Arc<Dataset>,
}

impl Dispatcher {
    /// Create a dispatcher over a loaded dataset
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Apply `event` to `selection` and recompute every bound chart
    ///
    /// The selection is only modified when both the incoming selection and
    /// the event are valid.
    pub fn handle(
        &self,
        selection: &mut SelectionState,
        event: &UiEvent,
    ) -> BindingResult<Vec<ChartUpdate>> {
        selection.validate()?;
        apply_event(selection, event)?;

        let trigger = event.trigger();
        let updates: Vec<ChartUpdate> = bindings_for(trigger)
            .map(|binding| {
                tracing::debug!(
                    trigger = %trigger,
                    target = %binding.target,
                    aggregation = binding.aggregation,
                    "Refreshing chart"
                );
                self.chart_update(binding.target, selection)
            })
            .collect();

        if updates.is_empty() {
            tracing::debug!(trigger = %trigger, "Event has no bound charts");
        }

        Ok(updates)
    }

    /// Render one chart for a selection
    pub fn render(&self, chart: ChartId, selection: &SelectionState) -> ChartSpec {
        refresh_fn(chart)(&self.dataset, selection)
    }

    /// Render every chart for a selection, in layout order
    pub fn render_all(&self, selection: &SelectionState) -> Vec<ChartUpdate> {
        ChartId::all()
            .iter()
            .map(|chart| self.chart_update(*chart, selection))
            .collect()
    }

    fn chart_update(&self, target: ChartId, selection: &SelectionState) -> ChartUpdate {
        ChartUpdate {
            target,
            figure: self.render(target, selection),
        }
    }
}

/// Validate an event and write its value into the selection
fn apply_event(selection: &mut SelectionState, event: &UiEvent) -> BindingResult<()> {
    match event {
        UiEvent::YearSlider { year } => selection.year = Some(*year),
        UiEvent::MetricDropdown { metric } => {
            selection.line_metric = offered_metric("metric-dropdown", metric, &LINE_METRICS)?;
        }
        UiEvent::MetricRadio { metric } => {
            selection.scatter_metric = offered_metric("metric-radio", metric, &SCATTER_METRICS)?;
        }
        UiEvent::Click { source, data } => {
            let data = data.as_ref();
            match source {
                ChartId::Chart1 => selection.chart1_genre = extract_category(data, ClickField::X),
                ChartId::PieChart => {
                    selection.pie_genre = extract_category(data, ClickField::Label)
                }
                ChartId::BarGraph => selection.bar_genre = extract_category(data, ClickField::X),
                // clicks on other charts drive nothing
                _ => {}
            }
        }
    }
    Ok(())
}

fn offered_metric(control: &'static str, name: &str, options: &[Metric]) -> BindingResult<Metric> {
    let metric: Metric = name
        .parse()
        .map_err(|_| BindingError::UnknownMetric(name.to_string()))?;

    if options.contains(&metric) {
        Ok(metric)
    } else {
        Err(BindingError::MetricNotOffered { control, metric })
    }
}
