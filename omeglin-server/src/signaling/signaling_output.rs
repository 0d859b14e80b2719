use async_trait::async_trait;
use omeglin_core::{ConnId, SignalMessage};

/// Delivery side of a signaling connection, as seen by the matchmaker.
///
/// Implementations must not wait on the network: a message is queued for the
/// connection and the call returns.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    async fn send(&self, conn: ConnId, message: SignalMessage);
}
