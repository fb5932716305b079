//! # Gamedash
//!
//! Interaction layer of a video-game sales dashboard: aggregations over a
//! static dataset, declarative chart specifications and the reactive bindings
//! that recompute charts when a control changes or a chart is clicked.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the in-memory record table
//! - [`aggregate`]: Pure aggregation functions over the dataset
//! - [`chart`]: Renderer-ready chart specifications
//! - [`binding`]: Events, selection state and the binding table
//! - [`api`]: REST API server with Axum
//! - [`websocket`]: Stateful WebSocket sessions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gamedash::binding::{Dispatcher, SelectionState, UiEvent};
//! use gamedash::dataset::load_dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(load_dataset(Path::new("video_games.csv"))?);
//!     let dispatcher = Dispatcher::new(dataset);
//!
//!     // Initial figures
//!     let mut selection = SelectionState::default();
//!     let charts = dispatcher.render_all(&selection);
//!     println!("Rendered {} charts", charts.len());
//!
//!     // Move the year slider
//!     let updates = dispatcher.handle(&mut selection, &UiEvent::YearSlider { year: 2008 })?;
//!     for update in updates {
//!         println!("{} -> {}", update.target, update.figure.title());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod binding;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    load_dataset, Dataset, DatasetError, DatasetLoader, DatasetResult, DatasetSummary, GameRecord,
    Metric,
};

pub use aggregate::{Correlation, CrossTabEntry, GenreYearSummary, RatingDistribution, YearValue};

pub use chart::{ChartId, ChartSpec};

pub use binding::{BindingError, ChartUpdate, Dispatcher, SelectionState, UiEvent};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ServerMessage, Session};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoggingConfig};
