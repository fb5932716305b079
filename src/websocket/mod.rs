//! WebSocket Sessions
//!
//! A long-lived alternative to the stateless event endpoint: the server keeps
//! the selection for the lifetime of the connection.
//!
//! ## Usage
//!
//! Clients connect to `/ws`, receive a `connected` message with every chart,
//! then send events:
//! - `{"type": "event", "event": {...}}` - Apply a UI event
//! - `{"type": "restore", "selection": {...}}` - Replace the selection
//! - `{"type": "ping"}` - Keepalive
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8273/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'event', event: {type: 'year_slider', year: 2008}}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   console.log('Received:', msg);
//! };
//! ```

mod handler;
mod messages;

pub use handler::{websocket_handler, Session};
pub use messages::{ClientMessage, ServerMessage};
