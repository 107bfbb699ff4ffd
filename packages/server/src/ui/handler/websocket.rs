//! WebSocket connection handlers.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};

use crate::{
    domain::{ConnectionId, PusherReceiver},
    infrastructure::codec,
    ui::state::AppState,
    usecase::BroadcastEngine,
};

/// Longest a single frame write may take before the connection is closed.
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound channel into the WebSocket sink.
///
/// Every frame pushed to this connection (history replay and broadcasts) goes
/// through `rx`, so the socket has exactly one writer. The task ends when the
/// pusher drops the sending side (the connection was evicted), when the socket
/// fails, or when a single write stalls past `WRITE_TIMEOUT`.
fn pusher_loop(
    connection_id: ConnectionId,
    mut rx: PusherReceiver,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            match tokio::time::timeout(WRITE_TIMEOUT, sender.send(Message::Text(frame.into())))
                .await
            {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::debug!("Failed to write to '{}': {}", connection_id, e);
                    break;
                }
                Err(_) => {
                    tracing::warn!("Write to '{}' timed out, closing", connection_id);
                    break;
                }
            }
        }
    })
}

/// Decode one inbound frame and hand it to the engine.
///
/// Malformed and rejected frames are dropped; the connection stays open.
async fn handle_frame(engine: &BroadcastEngine, connection_id: ConnectionId, frame: &[u8]) {
    let envelope = match codec::decode(frame) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("Dropped frame from '{}': {}", connection_id, e);
            return;
        }
    };

    let kind = envelope.kind();
    match engine.handle_envelope(connection_id, envelope).await {
        Ok(event) => {
            tracing::debug!(
                "Applied '{}' from '{}', broadcasted '{}'",
                kind,
                connection_id,
                event.kind()
            );
        }
        Err(e) => {
            tracing::warn!("Rejected '{}' from '{}': {}", kind, connection_id, e);
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();

    // History replay and every later broadcast land in the same bounded queue
    let rx = state.engine.connect(connection_id).await;

    let mut send_task = pusher_loop(connection_id, rx, sender);

    // Spawn a task to receive frames from this client, in arrival order
    let engine = state.engine.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_frame(&engine, connection_id, text.as_str().as_bytes()).await;
                }
                Message::Binary(data) => {
                    handle_frame(&engine, connection_id, &data).await;
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other.
    // The engine does not yield between a state change and the enqueue of its
    // event, so aborting the reader mid-frame cannot drop an applied event.
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.engine.disconnect(connection_id).await;
}
