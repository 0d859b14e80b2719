use crate::error::MatchmakerError;
use crate::matchmaker::{MatchmakerCommand, QueueStats};
use omeglin_core::{ConnId, SignalMessage};
use tokio::sync::{mpsc, oneshot};

/// Cloneable sending side of the matchmaker's command channel.
#[derive(Clone)]
pub struct MatchmakerHandle {
    command_tx: mpsc::Sender<MatchmakerCommand>,
}

impl MatchmakerHandle {
    /// Create a handle together with the receiver a `Matchmaker` runs on.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<MatchmakerCommand>) {
        let (command_tx, command_rx) = mpsc::channel(capacity);
        (Self { command_tx }, command_rx)
    }

    pub async fn connect(&self, conn: ConnId) -> Result<(), MatchmakerError> {
        self.send(MatchmakerCommand::Connect { conn }).await
    }

    pub async fn signal(&self, conn: ConnId, message: SignalMessage) -> Result<(), MatchmakerError> {
        self.send(MatchmakerCommand::Signal { conn, message }).await
    }

    pub async fn close(&self, conn: ConnId) -> Result<(), MatchmakerError> {
        self.send(MatchmakerCommand::Close { conn }).await
    }

    /// Queue counts as of every command sent through this handle before the call.
    pub async fn stats(&self) -> Result<QueueStats, MatchmakerError> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(MatchmakerCommand::Stats { reply }).await?;
        reply_rx.await.map_err(|_| MatchmakerError::Stopped)
    }

    async fn send(&self, cmd: MatchmakerCommand) -> Result<(), MatchmakerError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| MatchmakerError::Stopped)
    }
}
