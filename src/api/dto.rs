//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::binding::{ChartUpdate, SelectionState, UiEvent};

// ============================================
// EVENT DTOs
// ============================================

/// A UI event together with the session's current selection
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    /// Selection before the event; defaults when omitted
    #[serde(default)]
    pub selection: SelectionState,
    /// The event to apply
    pub event: UiEvent,
}

/// Result of applying an event
#[derive(Debug, Serialize)]
pub struct EventResponse {
    /// Selection after the event; send it back with the next event
    pub selection: SelectionState,
    /// Recomputed charts (empty when the event drives nothing)
    pub updates: Vec<ChartUpdate>,
}

// ============================================
// CHART DTOs
// ============================================

/// Every chart rendered for one selection
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub selection: SelectionState,
    pub charts: Vec<ChartUpdate>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" when the dataset has records, "empty" otherwise
    pub dataset: String,
    pub record_count: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
