//! Chart Routes
//!
//! Render charts for a given selection without applying an event.
//!
//! - GET /api/v1/charts - Every chart for the default selection
//! - POST /api/v1/charts - Every chart for the posted selection
//! - GET /api/v1/charts/:id - One chart for the default selection

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartsResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::binding::SelectionState;
use crate::chart::{ChartId, ChartSpec};

/// GET /api/v1/charts
///
/// Initial figures of the dashboard.
pub async fn default_charts(State(state): State<Arc<AppState>>) -> Json<ChartsResponse> {
    Json(render(&state, SelectionState::default()))
}

/// POST /api/v1/charts
///
/// Restore a session: every chart for a previously returned selection.
pub async fn charts_for_selection(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<SelectionState>,
) -> ApiResult<Json<ChartsResponse>> {
    selection.validate()?;
    Ok(Json(render(&state, selection)))
}

/// GET /api/v1/charts/:id
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChartSpec>> {
    let chart: ChartId = id.parse().map_err(ApiError::NotFound)?;
    Ok(Json(
        state.dispatcher.render(chart, &SelectionState::default()),
    ))
}

fn render(state: &AppState, selection: SelectionState) -> ChartsResponse {
    let charts = state.dispatcher.render_all(&selection);
    ChartsResponse { selection, charts }
}
