//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.
//! Each connection owns one `Session`; nothing is shared between connections
//! except the read-only dispatcher.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::binding::{Dispatcher, SelectionState};

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dispatcher = Arc::clone(&state.dispatcher);
    ws.on_upgrade(move |socket| handle_socket(socket, dispatcher))
}

/// One connected UI host and its selection
pub struct Session {
    id: String,
    dispatcher: Arc<Dispatcher>,
    selection: SelectionState,
}

impl Session {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            dispatcher,
            selection: SelectionState::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Greeting with every chart for the initial selection
    pub fn connected(&self) -> ServerMessage {
        ServerMessage::Connected {
            session_id: self.id.clone(),
            selection: self.selection.clone(),
            charts: self.dispatcher.render_all(&self.selection),
        }
    }

    /// Apply a client message and produce the reply
    pub fn handle(&mut self, message: ClientMessage) -> ServerMessage {
        match message {
            ClientMessage::Event { event } => {
                match self.dispatcher.handle(&mut self.selection, &event) {
                    Ok(updates) => ServerMessage::ChartUpdate {
                        selection: self.selection.clone(),
                        updates,
                    },
                    Err(e) => {
                        tracing::debug!(
                            session_id = %self.id,
                            trigger = %event.trigger(),
                            error = %e,
                            "Event rejected"
                        );
                        ServerMessage::error(e.to_string())
                    }
                }
            }
            ClientMessage::Restore { selection } => {
                if let Err(e) = selection.validate() {
                    tracing::debug!(session_id = %self.id, error = %e, "Restore rejected");
                    return ServerMessage::error(e.to_string());
                }
                self.selection = selection;
                ServerMessage::ChartUpdate {
                    selection: self.selection.clone(),
                    updates: self.dispatcher.render_all(&self.selection),
                }
            }
            ClientMessage::Ping => ServerMessage::Pong,
        }
    }

    /// Handle a raw text frame
    pub fn handle_text(&mut self, text: &str) -> ServerMessage {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(message) => self.handle(message),
            Err(e) => {
                tracing::debug!(
                    session_id = %self.id,
                    error = %e,
                    text = %text,
                    "Invalid client message"
                );
                ServerMessage::error(format!("Invalid message format: {}", e))
            }
        }
    }
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, dispatcher: Arc<Dispatcher>) {
    let (mut sender, mut receiver) = socket.split();
    let mut session = Session::new(dispatcher);

    tracing::info!(session_id = %session.id(), "WebSocket session opened");

    if send(&mut sender, &session.connected()).await.is_err() {
        tracing::error!(session_id = %session.id(), "Failed to send connected message");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    session_id = %session.id(),
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        let reply = match message {
            Message::Text(text) => session.handle_text(&text),
            // We don't support binary messages
            Message::Binary(_) => ServerMessage::error("Binary messages not supported"),
            // Axum answers pings automatically
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => {
                tracing::debug!(session_id = %session.id(), "Client requested close");
                break;
            }
        };

        if send(&mut sender, &reply).await.is_err() {
            tracing::debug!(
                session_id = %session.id(),
                "WebSocket send failed, closing connection"
            );
            break;
        }
    }

    tracing::info!(session_id = %session.id(), "WebSocket session closed");
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), ()> {
    let text = serde_json::to_string(message).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize message");
    })?;
    sender.send(Message::Text(text)).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartId;
    use crate::dataset::{Dataset, GameRecord, Metric};

    fn session() -> Session {
        let dataset = Dataset::new(vec![
            GameRecord::new(2010, "Racing")
                .rating("E")
                .with(Metric::NaSales, 1.0)
                .with(Metric::UserScore, 8.0)
                .with(Metric::CriticScore, 75.0),
            GameRecord::new(2011, "Shooter")
                .rating("M")
                .with(Metric::NaSales, 3.0)
                .with(Metric::UserScore, 6.0)
                .with(Metric::CriticScore, 85.0),
        ]);
        Session::new(Arc::new(Dispatcher::new(Arc::new(dataset))))
    }

    #[test]
    fn test_connected_renders_every_chart() {
        let session = session();
        match session.connected() {
            ServerMessage::Connected {
                session_id, charts, ..
            } => {
                assert_eq!(session_id, session.id());
                assert_eq!(charts.len(), ChartId::all().len());
            }
            _ => panic!("Expected Connected message"),
        }
    }

    #[test]
    fn test_event_updates_session_selection() {
        let mut session = session();
        let reply = session.handle_text(
            r#"{"type": "event", "event": {"type": "metric_radio", "metric": "User_Score"}}"#,
        );

        match reply {
            ServerMessage::ChartUpdate { selection, updates } => {
                assert_eq!(selection.scatter_metric, Metric::UserScore);
                assert_eq!(updates.len(), 1);
                assert_eq!(updates[0].target, ChartId::ScatterPlot);
            }
            _ => panic!("Expected ChartUpdate message"),
        }
        assert_eq!(session.selection().scatter_metric, Metric::UserScore);
    }

    #[test]
    fn test_rejected_event_keeps_selection() {
        let mut session = session();
        session.handle_text(r#"{"type": "event", "event": {"type": "year_slider", "year": 2011}}"#);

        let reply = session.handle_text(
            r#"{"type": "event", "event": {"type": "metric_dropdown", "metric": "Bogus"}}"#,
        );

        assert!(matches!(reply, ServerMessage::Error { .. }));
        assert_eq!(session.selection().year, Some(2011));
        assert_eq!(session.selection().line_metric, Metric::NaSales);
    }

    #[test]
    fn test_restore_renders_every_chart() {
        let mut session = session();
        let reply = session.handle_text(
            r#"{"type": "restore", "selection": {"year": 2011, "bar_genre": "Racing"}}"#,
        );

        match reply {
            ServerMessage::ChartUpdate { selection, updates } => {
                assert_eq!(selection.bar_genre.as_deref(), Some("Racing"));
                assert_eq!(updates.len(), ChartId::all().len());
            }
            _ => panic!("Expected ChartUpdate message"),
        }
    }

    #[test]
    fn test_restore_rejects_unoffered_metric() {
        let mut session = session();
        session.handle_text(r#"{"type": "event", "event": {"type": "year_slider", "year": 2011}}"#);

        let reply = session.handle_text(
            r#"{"type": "restore", "selection": {"scatter_metric": "JP_Sales"}}"#,
        );

        assert!(matches!(reply, ServerMessage::Error { .. }));
        assert_eq!(session.selection().year, Some(2011));
        assert_eq!(session.selection().scatter_metric, Metric::CriticCount);
    }

    #[test]
    fn test_ping_and_garbage() {
        let mut session = session();
        assert!(matches!(
            session.handle_text(r#"{"type": "ping"}"#),
            ServerMessage::Pong
        ));
        assert!(matches!(
            session.handle_text("not json"),
            ServerMessage::Error { .. }
        ));
    }

    #[test]
    fn test_sessions_are_independent() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(Dataset::default())));
        let mut first = Session::new(Arc::clone(&dispatcher));
        let second = Session::new(dispatcher);

        first.handle_text(r#"{"type": "event", "event": {"type": "year_slider", "year": 1999}}"#);

        assert_eq!(first.selection().year, Some(1999));
        assert_eq!(second.selection().year, None);
        assert_ne!(first.id(), second.id());
    }
}
