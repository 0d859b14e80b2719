use crate::matchmaker::{ExchangeQueue, MatchmakerCommand, Outbound};
use crate::signaling::SignalingOutput;
use omeglin_core::{ConnId, SignalMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the exchange queue and applies connection events to it one at a time.
pub struct Matchmaker {
    queue: ExchangeQueue,
    command_rx: mpsc::Receiver<MatchmakerCommand>,
    signaling: Arc<dyn SignalingOutput>,
}

impl Matchmaker {
    pub fn new(
        command_rx: mpsc::Receiver<MatchmakerCommand>,
        signaling: Arc<dyn SignalingOutput>,
    ) -> Self {
        Self {
            queue: ExchangeQueue::new(),
            command_rx,
            signaling,
        }
    }

    pub async fn run(mut self) {
        info!("Matchmaker event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Command channel closed. Matchmaker event loop finished");
    }

    async fn handle_command(&mut self, cmd: MatchmakerCommand) {
        match cmd {
            MatchmakerCommand::Connect { conn } => {
                info!("Connection {} opened", conn);
            }

            MatchmakerCommand::Signal { conn, message } => {
                self.handle_signal(conn, message).await;
            }

            MatchmakerCommand::Close { conn } => {
                info!("Connection {} closed", conn);
                self.pairing_abort(conn).await;
            }

            MatchmakerCommand::Stats { reply } => {
                let _ = reply.send(self.queue.stats());
            }
        }
    }

    async fn handle_signal(&mut self, conn: ConnId, message: SignalMessage) {
        match message {
            SignalMessage::PairingStart => {
                let outbound = self.queue.pairing_start(conn);
                match self.queue.exchange_of(conn) {
                    Some(ex) if !ex.is_waiting() => {
                        info!("Paired {} with {}", ex.first(), conn)
                    }
                    _ => info!("Connection {} waiting for a partner", conn),
                }
                self.dispatch(outbound).await;
            }

            SignalMessage::PairingAbort => self.pairing_abort(conn).await,

            SignalMessage::PairingDone => match self.queue.pairing_done(conn) {
                Some(2) => info!("Exchange of {} completed on both sides", conn),
                Some(count) => debug!("Connection {} done ({}/2)", conn, count),
                None => debug!("PAIRING_DONE from {} without an exchange", conn),
            },

            message if message.is_relay() => {
                let name = message.name();
                match self.queue.relay(conn, message) {
                    Ok(outbound) => self.dispatch([outbound]).await,
                    Err(e) => warn!("Dropped {} from {}: {}", name, conn, e),
                }
            }

            message => {
                warn!(
                    "Ignoring server-only message {} from {}",
                    message.name(),
                    conn
                );
            }
        }
    }

    async fn pairing_abort(&mut self, conn: ConnId) {
        match self.queue.pairing_abort(conn) {
            Some(outbound) => {
                info!("Exchange of {} removed, notifying {}", conn, outbound.to);
                self.dispatch([outbound]).await;
            }
            None => debug!("Nothing to notify for {}", conn),
        }
    }

    async fn dispatch(&self, outbound: impl IntoIterator<Item = Outbound>) {
        for Outbound { to, message } in outbound {
            self.signaling.send(to, message).await;
        }
    }
}
