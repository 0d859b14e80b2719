pub mod websocket_tests;

use std::sync::Arc;
use tracing::Level;

use omeglin_server::{Matchmaker, MatchmakerHandle};
use tokio::sync::mpsc;

use crate::utils::{Delivery, MockSignalingOutput};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_matchmaker() -> (
    MatchmakerHandle,
    mpsc::UnboundedReceiver<Delivery>,
    MockSignalingOutput,
) {
    let (matchmaker, command_rx) = MatchmakerHandle::channel(100);
    let (signaling, delivery_rx) = MockSignalingOutput::new();

    let actor = Matchmaker::new(command_rx, Arc::new(signaling.clone()));

    tokio::spawn(async move {
        actor.run().await;
    });

    (matchmaker, delivery_rx, signaling)
}
