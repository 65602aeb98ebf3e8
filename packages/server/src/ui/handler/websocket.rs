//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatLine, Client},
    infrastructure::sink::ChannelSink,
    ui::state::AppState,
    usecase::{BroadcastMessageUseCase, JoinRoomUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs one chat session until the connection closes.
///
/// The session's membership is dropped on every exit path, including when
/// this future itself is dropped, which removes the client from the room.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, receiver) = socket.split();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::channel(state.outbound_buffer);

    let membership =
        JoinRoomUseCase::new(state.repository.clone()).execute(Arc::new(ChannelSink::new(tx)));
    let client = membership.client().clone();
    let broadcast = BroadcastMessageUseCase::new(state.repository.clone());

    // Both halves run in this task so that cancelling the session cancels both.
    tokio::select! {
        _ = forward_outbound(rx, sender, &client) => {
            tracing::debug!("Outbound side of {} finished", client.name);
        }
        _ = relay_inbound(receiver, &client, &broadcast) => {
            tracing::debug!("Inbound side of {} finished", client.name);
        }
    }

    drop(membership);
    tracing::info!("{} disconnected", client.name);
}

/// Writes lines broadcast by other clients to this client's socket.
async fn forward_outbound(
    mut rx: mpsc::Receiver<ChatLine>,
    mut sender: SplitSink<WebSocket, Message>,
    client: &Client,
) {
    while let Some(line) = rx.recv().await {
        if let Err(e) = sender.send(Message::Text(line.into_string().into())).await {
            tracing::warn!("Failed to write to {}: {}", client.name, e);
            break;
        }
    }
}

/// Reads frames from this client and broadcasts its text messages.
async fn relay_inbound(
    mut receiver: SplitStream<WebSocket>,
    client: &Client,
    broadcast: &BroadcastMessageUseCase,
) {
    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!("WebSocket error from {}: {}", client.name, e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                tracing::debug!("Received text from {}: {}", client.name, text.as_str());
                broadcast.execute(client, text.as_str()).await;
            }
            Message::Close(_) => {
                tracing::info!("{} requested close", client.name);
                break;
            }
            Message::Binary(_) => {
                tracing::debug!("Ignoring binary frame from {}", client.name);
            }
            Message::Ping(_) | Message::Pong(_) => {
                // Ping/pong is handled automatically by the WebSocket protocol
            }
        }
    }
}
