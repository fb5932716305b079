//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::binding::Dispatcher;
use crate::config::ApiConfig;
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
///
/// Holds nothing mutable: selections travel with each request or live in a
/// WebSocket connection task.
#[derive(Clone)]
pub struct AppState {
    /// Event dispatcher over the loaded dataset
    pub dispatcher: Arc<Dispatcher>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over a loaded dataset
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(dataset)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.dispatcher.dataset()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
