//! Chart Specification Builder
//!
//! Declarative chart descriptions handed to the rendering collaborator.

pub mod builder;
pub mod spec;

pub use builder::{
    correlation_scatter, critic_score_bar, cross_tab_pie, genre_score_scatter, genre_trend_chart,
    rating_bar_graph, sales_line_chart,
};
pub use spec::{Axis, ChartId, ChartKind, ChartSpec, Layout, LineStyle, Marker, Title, Trace, TraceType, Values};
