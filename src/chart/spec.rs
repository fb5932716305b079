//! Chart description types
//!
//! A [`ChartSpec`] serializes to the `{data, layout}` figure shape that
//! Plotly-compatible renderers accept. Specs are plain values: built fresh
//! for every recomputation and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Charts on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    /// Yearly sales line (tab 1)
    LineChart,
    /// Critic score scatter with correlation title (tab 2)
    ScatterPlot,
    /// Critic score per genre bar, click source (tab 3)
    #[serde(rename = "chart1")]
    Chart1,
    /// Genre drill-down overlay (tab 3)
    #[serde(rename = "chart2")]
    Chart2,
    /// Genre/rating pie (tab 4)
    PieChart,
    /// Genre/rating bar (tab 4)
    BarGraph,
}

impl ChartId {
    /// Get all charts in layout order
    pub fn all() -> &'static [ChartId] {
        &[
            ChartId::LineChart,
            ChartId::ScatterPlot,
            ChartId::Chart1,
            ChartId::Chart2,
            ChartId::PieChart,
            ChartId::BarGraph,
        ]
    }

    /// Element id used by the UI host
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::LineChart => "line-chart",
            ChartId::ScatterPlot => "scatter-plot",
            ChartId::Chart1 => "chart1",
            ChartId::Chart2 => "chart2",
            ChartId::PieChart => "pie-chart",
            ChartId::BarGraph => "bar-graph",
        }
    }

    /// Chart type is fixed per chart, never derived from data
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartId::LineChart => ChartKind::Line,
            ChartId::ScatterPlot | ChartId::Chart2 => ChartKind::Scatter,
            ChartId::Chart1 | ChartId::BarGraph => ChartKind::Bar,
            ChartId::PieChart => ChartKind::Pie,
        }
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown chart: {}", s))
    }
}

/// Visual family of a chart
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
    Pie,
}

/// A renderable chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::new(title),
        }
    }

    /// Builder method: add a trace
    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Builder method: set axis titles
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.layout.xaxis = Some(Axis::titled(x));
        self.layout.yaxis = Some(Axis::titled(y));
        self
    }

    /// Builder method: stack bar traces
    pub fn stacked(mut self) -> Self {
        self.layout.barmode = Some("stack".to_string());
        self
    }

    /// Title text
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Total number of plotted points across all traces
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

/// Plotly trace type
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Scatter,
    Bar,
    Pie,
}

/// Axis values; years stay integers, categories stay strings
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Values {
    Integers(Vec<i32>),
    Numbers(Vec<f64>),
    /// Numbers with gaps, serialized as `null`
    Nullable(Vec<Option<f64>>),
    Text(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Integers(v) => v.len(),
            Values::Numbers(v) => v.len(),
            Values::Nullable(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One series of a chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    /// Per-point payload echoed back in click events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    fn of(trace_type: TraceType) -> Self {
        Self {
            trace_type,
            mode: None,
            name: None,
            x: None,
            y: None,
            labels: None,
            values: None,
            customdata: None,
            line: None,
            marker: None,
        }
    }

    /// Line series (markers included so single points stay visible)
    pub fn line(x: Values, y: Values) -> Self {
        let mut trace = Self::of(TraceType::Scatter);
        trace.mode = Some("lines+markers".to_string());
        trace.x = Some(x);
        trace.y = Some(y);
        trace
    }

    /// Marker-only series
    pub fn scatter(x: Values, y: Values) -> Self {
        let mut trace = Self::of(TraceType::Scatter);
        trace.mode = Some("markers".to_string());
        trace.x = Some(x);
        trace.y = Some(y);
        trace
    }

    pub fn bar(x: Values, y: Values) -> Self {
        let mut trace = Self::of(TraceType::Bar);
        trace.x = Some(x);
        trace.y = Some(y);
        trace
    }

    pub fn pie(labels: Vec<String>, values: Vec<f64>) -> Self {
        let mut trace = Self::of(TraceType::Pie);
        trace.labels = Some(labels);
        trace.values = Some(values);
        trace
    }

    /// Builder method: set the legend name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: set click payloads
    pub fn customdata(mut self, customdata: Vec<String>) -> Self {
        self.customdata = Some(customdata);
        self
    }

    /// Builder method: set line style
    pub fn styled(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    /// Builder method: set marker color
    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            color: color.into(),
        });
        self
    }

    /// Number of points in this trace
    pub fn len(&self) -> usize {
        match (&self.x, &self.values) {
            (Some(x), _) => x.len(),
            (None, Some(values)) => values.len(),
            (None, None) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: String,
}

/// Chart layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title { text: title.into() },
            xaxis: None,
            yaxis: None,
            barmode: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title { text: text.into() },
        }
    }
}
