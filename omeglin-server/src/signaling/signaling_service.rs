use crate::matchmaker::{Matchmaker, MatchmakerHandle};
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use omeglin_core::{ConnId, SignalMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    connections: DashMap<ConnId, mpsc::UnboundedSender<Message>>,
}

/// Registry of open signaling sockets plus the route into the matchmaker.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    matchmaker: MatchmakerHandle,
}

impl SignalingService {
    pub fn new(matchmaker: MatchmakerHandle) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
            matchmaker,
        }
    }

    /// Create a service and spawn the matchmaker that replies through it.
    pub fn spawn(command_buffer: usize) -> Self {
        let (matchmaker, command_rx) = MatchmakerHandle::channel(command_buffer);
        let service = Self::new(matchmaker);

        let output: Arc<dyn SignalingOutput> = Arc::new(service.clone());
        tokio::spawn(Matchmaker::new(command_rx, output).run());

        service
    }

    pub fn matchmaker(&self) -> &MatchmakerHandle {
        &self.matchmaker
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    pub(crate) fn add_connection(&self, conn: ConnId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(conn, tx);
    }

    pub(crate) fn remove_connection(&self, conn: &ConnId) {
        self.inner.connections.remove(conn);
    }

    fn send_signal(&self, conn: ConnId, msg: SignalMessage) {
        let Some(connection) = self.inner.connections.get(&conn) else {
            warn!(
                "Attempted to send {} to closed connection {}",
                msg.name(),
                conn
            );
            return;
        };

        match msg.to_json() {
            Ok(json) => {
                if let Err(e) = connection.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", conn, e);
                }
            }
            Err(e) => error!("Failed to serialize signal message: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, conn: ConnId, message: SignalMessage) {
        self.send_signal(conn, message);
    }
}
