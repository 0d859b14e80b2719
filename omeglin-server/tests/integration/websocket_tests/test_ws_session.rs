use omeglin_core::SignalMessage;
use omeglin_server::ServerConfig;

use crate::integration::init_tracing;
use crate::utils::{WsTestClient, offer, spawn_test_server, wait_for_stats};

fn test_config() -> ServerConfig {
    ServerConfig {
        ping_interval_secs: 0,
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_two_browsers_pair_relay_and_part() {
    init_tracing();

    let (addr, signaling) = spawn_test_server(test_config())
        .await
        .expect("Server failed to start");

    let mut alice = WsTestClient::connect(addr).await.expect("Connect failed");
    let mut bob = WsTestClient::connect(addr).await.expect("Connect failed");

    alice
        .send(&SignalMessage::PairingStart)
        .await
        .expect("Send failed");
    wait_for_stats(&signaling, |s| s.waiting == 1)
        .await
        .expect("alice never queued");

    bob.send(&SignalMessage::PairingStart)
        .await
        .expect("Send failed");

    assert_eq!(
        alice.recv().await.expect("No frame"),
        SignalMessage::PartnerFound { go_first: true }
    );
    assert_eq!(
        bob.recv().await.expect("No frame"),
        SignalMessage::PartnerFound { go_first: false }
    );

    let sdp = r#"{"type":"offer","sdp":"v=0\r\n"}"#;
    alice.send(&offer(sdp)).await.expect("Send failed");
    assert_eq!(bob.recv().await.expect("No frame"), offer(sdp));

    alice.close().await.expect("Close failed");

    assert_eq!(
        bob.recv().await.expect("No frame"),
        SignalMessage::PartnerLeft
    );

    let stats = wait_for_stats(&signaling, |s| s.exchanges == 0)
        .await
        .expect("Exchange was not reclaimed");
    assert_eq!(stats.waiting, 0);
}

#[tokio::test]
async fn test_wire_frames_match_browser_protocol() {
    init_tracing();

    let (addr, signaling) = spawn_test_server(test_config())
        .await
        .expect("Server failed to start");

    let mut first = WsTestClient::connect(addr).await.expect("Connect failed");
    let mut second = WsTestClient::connect(addr).await.expect("Connect failed");

    first
        .send_raw(r#"{"name":"PAIRING_START"}"#)
        .await
        .expect("Send failed");
    wait_for_stats(&signaling, |s| s.waiting == 1)
        .await
        .expect("first never queued");
    second
        .send_raw(r#"{"name":"PAIRING_START"}"#)
        .await
        .expect("Send failed");

    first.recv().await.expect("No frame");
    second.recv().await.expect("No frame");

    let candidate = r#"{"candidate":"candidate:1 1 udp 1 10.0.0.1 5000 typ host","sdpMid":"0"}"#;
    let frame = serde_json::json!({ "name": "SDP_ICE_CANDIDATE", "data": candidate }).to_string();
    second.send_raw(&frame).await.expect("Send failed");

    assert_eq!(
        first.recv().await.expect("No frame"),
        SignalMessage::IceCandidate {
            candidate: candidate.to_owned()
        }
    );

    for client in [&mut first, &mut second] {
        client
            .send_raw(r#"{"name":"PAIRING_DONE"}"#)
            .await
            .expect("Send failed");
    }

    wait_for_stats(&signaling, |s| s.exchanges == 0)
        .await
        .expect("Exchange was not completed");
    assert_eq!(signaling.connection_count(), 2);
}
