use crate::matchmaker::QueueStats;
use omeglin_core::{ConnId, SignalMessage};
use tokio::sync::oneshot;

/// Events delivered to the matchmaker by the transport layer.
#[derive(Debug)]
pub enum MatchmakerCommand {
    /// A signaling socket was opened.
    Connect { conn: ConnId },

    /// A decoded frame arrived on a socket.
    Signal { conn: ConnId, message: SignalMessage },

    /// A socket closed. Handled like `PAIRING_ABORT`.
    Close { conn: ConnId },

    /// Report the current queue counts.
    Stats { reply: oneshot::Sender<QueueStats> },
}
