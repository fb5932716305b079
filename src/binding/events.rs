//! UI Event Types
//!
//! Events issued by the UI host, and extraction of the clicked category from
//! renderer click payloads.

use crate::chart::ChartId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event from a dashboard control or chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Year slider moved
    YearSlider { year: i32 },
    /// Sales metric dropdown changed (line chart tab)
    MetricDropdown { metric: String },
    /// Metric radio changed (scatter tab)
    MetricRadio { metric: String },
    /// A chart was clicked
    Click {
        source: ChartId,
        /// Raw click payload from the renderer; `null` or absent means no selection
        #[serde(default)]
        data: Option<Value>,
    },
}

impl UiEvent {
    /// The trigger this event fires
    pub fn trigger(&self) -> Trigger {
        match self {
            UiEvent::YearSlider { .. } => Trigger::YearSlider,
            UiEvent::MetricDropdown { .. } => Trigger::MetricDropdown,
            UiEvent::MetricRadio { .. } => Trigger::MetricRadio,
            UiEvent::Click { source, .. } => Trigger::Click(*source),
        }
    }
}

/// Event source as seen by the wiring table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    YearSlider,
    MetricDropdown,
    MetricRadio,
    Click(ChartId),
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::YearSlider => write!(f, "year-slider"),
            Trigger::MetricDropdown => write!(f, "metric-dropdown"),
            Trigger::MetricRadio => write!(f, "metric-radio"),
            Trigger::Click(chart) => write!(f, "click:{}", chart),
        }
    }
}

/// Which point attribute carries the category for a click source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickField {
    /// Bar charts report the category on the x axis
    X,
    /// Pie charts report the slice label (or its customdata)
    Label,
}

/// Pull the clicked category out of a `{"points": [{...}]}` payload
///
/// Anything that does not have that shape, or carries an empty or
/// non-string category, is treated as no selection.
pub fn extract_category(data: Option<&Value>, field: ClickField) -> Option<String> {
    let point = data?.get("points")?.as_array()?.first()?;

    let raw = match field {
        ClickField::X => point.get("x"),
        ClickField::Label => point
            .get("customdata")
            .and_then(customdata_text)
            .or_else(|| point.get("label")),
    }?;

    let category = raw.as_str()?.trim();
    if category.is_empty() {
        None
    } else {
        Some(category.to_string())
    }
}

/// Plotly reports pie customdata either as a scalar or as a one-element array
fn customdata_text(value: &Value) -> Option<&Value> {
    match value {
        Value::String(_) => Some(value),
        Value::Array(items) => items.first().filter(|v| v.is_string()),
        _ => None,
    }
}
