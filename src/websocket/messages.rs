//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! the dashboard UI host and the server.

use serde::{Deserialize, Serialize};

use crate::binding::{ChartUpdate, SelectionState, UiEvent};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A control changed or a chart was clicked
    Event {
        /// The UI event to apply to the session's selection
        event: UiEvent,
    },
    /// Replace the session's selection and re-render every chart
    Restore { selection: SelectionState },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique session identifier
        session_id: String,
        /// Initial selection
        selection: SelectionState,
        /// Every chart for the initial selection
        charts: Vec<ChartUpdate>,
    },
    /// Charts recomputed after an event or restore
    ChartUpdate {
        /// Selection after the change
        selection: SelectionState,
        /// Recomputed charts; empty when the event drives nothing
        updates: Vec<ChartUpdate>,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}
