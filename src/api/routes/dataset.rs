//! Dataset Routes
//!
//! Read-only views of the loaded dataset and the controls derived from it.
//!
//! - GET /api/v1/dataset - Distinct keys and record count
//! - GET /api/v1/controls - Control options, defaults and tabs

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::binding::Controls;
use crate::dataset::DatasetSummary;

/// GET /api/v1/dataset
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset().summary())
}

/// GET /api/v1/controls
pub async fn get_controls(State(state): State<Arc<AppState>>) -> Json<Controls> {
    Json(Controls::for_dataset(state.dataset()))
}
