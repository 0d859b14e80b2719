use crate::app::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use omeglin_core::{ConnId, SignalMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tracing::{error, info, warn};

/// Upgrade handler for the matchmaking socket. Every upgrade is a new participant.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let conn = ConnId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn, state))
}

async fn handle_socket(socket: WebSocket, conn: ConnId, state: Arc<AppState>) {
    info!("New WebSocket connection: {}", conn);

    let service = state.signaling.clone();
    let matchmaker = service.matchmaker().clone();

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_connection(conn, tx.clone());

    if let Err(e) = matchmaker.connect(conn).await {
        error!("Matchmaker unavailable for {}: {}", conn, e);
        service.remove_connection(&conn);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let keep_alive_task = state
        .ping_interval
        .map(|period| tokio::spawn(keep_alive(tx, period)));

    let mut recv_task = tokio::spawn({
        let matchmaker = matchmaker.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match text.as_str().parse::<SignalMessage>() {
                        Ok(message) if message.is_server_only() => {
                            warn!("Ignoring server-only {} from {}", message.name(), conn)
                        }
                        Ok(message) => {
                            if let Err(e) = matchmaker.signal(conn, message).await {
                                error!("Matchmaker died: {}", e);
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid signaling message from {}: {}", conn, e),
                    },
                    Message::Binary(_) => warn!("Ignoring binary frame from {}", conn),
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    if let Some(task) = keep_alive_task {
        task.abort();
    }

    if let Err(e) = matchmaker.close(conn).await {
        error!("Failed to report close of {}: {}", conn, e);
    }

    service.remove_connection(&conn);
    info!("WebSocket disconnected: {}", conn);
}

async fn keep_alive(tx: mpsc::UnboundedSender<Message>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);

    loop {
        ticker.tick().await;
        if tx.send(Message::Ping(Bytes::new())).is_err() {
            break;
        }
    }
}
