//! Event Routes
//!
//! Apply a UI event to a selection and return the recomputed charts.
//!
//! - POST /api/v1/events - Apply one event

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{EventRequest, EventResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/events
///
/// The selection round-trips through the client, so the server keeps no
/// per-session state.
pub async fn apply_event(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let EventRequest {
        mut selection,
        event,
    } = req;

    let updates = state.dispatcher.handle(&mut selection, &event)?;

    tracing::debug!(
        trigger = %event.trigger(),
        updates = updates.len(),
        "Event applied"
    );

    Ok(Json(EventResponse { selection, updates }))
}
