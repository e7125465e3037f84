//! WebSocket endpoint streaming run events to the page.

pub mod events;

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

/// GET /ws - Upgrade to a WebSocket that receives every [`events::DashboardEvent`].
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| stream_events(socket, state))
}

/// What to do with one receive from the broadcast channel.
#[derive(Debug, PartialEq)]
enum Outgoing {
    /// Forward this JSON frame.
    Frame(String),
    /// Nothing to send.
    Skip,
    /// Close the socket.
    Close,
}

/// A lagged client is disconnected; the page reconnects and rebuilds its
/// panels from the API.
fn outgoing(received: Result<events::DashboardEvent, RecvError>) -> Outgoing {
    match received {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(text) => Outgoing::Frame(text),
            Err(e) => {
                warn!("Failed to serialize {} event: {}", event.name(), e);
                Outgoing::Skip
            }
        },
        Err(RecvError::Lagged(skipped)) => {
            warn!("WebSocket client lagged, skipped {} events; disconnecting", skipped);
            Outgoing::Close
        }
        Err(RecvError::Closed) => Outgoing::Close,
    }
}

async fn stream_events(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut events = state.subscribe();
    debug!("WebSocket client connected");

    loop {
        tokio::select! {
            received = events.recv() => match outgoing(received) {
                Outgoing::Frame(text) => {
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Outgoing::Skip => {}
                Outgoing::Close => {
                    let _ = sender.send(Message::Close(None)).await;
                    break;
                }
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    debug!("WebSocket client disconnected");
}
