use omeglin_core::SignalMessage;

use crate::integration::{create_test_matchmaker, init_tracing};
use crate::utils::{Delivery, answer, ice, offer, settle, start_pair};

#[tokio::test]
async fn test_offer_and_answer_reach_partner_verbatim() {
    init_tracing();

    let (matchmaker, mut delivery_rx, _signaling) = create_test_matchmaker();
    let (a, b) = start_pair(&matchmaker, &mut delivery_rx)
        .await
        .expect("Pairing failed");

    let sdp_offer = r#"{"type":"offer","sdp":"v=0\r\no=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n"}"#;
    let sdp_answer = r#"{"type":"answer","sdp":"v=0\r\no=- 1 2 IN IP4 0.0.0.0\r\n"}"#;

    matchmaker.signal(a, offer(sdp_offer)).await.expect("Signal failed");
    let (_, deliveries) = settle(&matchmaker, &mut delivery_rx)
        .await
        .expect("Matchmaker did not settle");
    assert_eq!(
        deliveries,
        vec![Delivery {
            to: b,
            message: offer(sdp_offer),
        }]
    );

    matchmaker.signal(b, answer(sdp_answer)).await.expect("Signal failed");
    let (_, deliveries) = settle(&matchmaker, &mut delivery_rx)
        .await
        .expect("Matchmaker did not settle");
    assert_eq!(
        deliveries,
        vec![Delivery {
            to: a,
            message: answer(sdp_answer),
        }]
    );
}

#[tokio::test]
async fn test_ice_candidates_keep_sender_order() {
    init_tracing();

    let (matchmaker, mut delivery_rx, signaling) = create_test_matchmaker();
    let (a, b) = start_pair(&matchmaker, &mut delivery_rx)
        .await
        .expect("Pairing failed");

    let candidates: Vec<String> = (0..10)
        .map(|i| format!(r#"{{"candidate":"candidate:{i} 1 udp 2122260223 10.0.0.{i} 5000{i} typ host"}}"#))
        .collect();

    for candidate in &candidates {
        matchmaker.signal(b, ice(candidate)).await.expect("Signal failed");
    }

    settle(&matchmaker, &mut delivery_rx)
        .await
        .expect("Matchmaker did not settle");

    let received = signaling.messages_for(&a).await;
    let expected: Vec<_> = std::iter::once(SignalMessage::PartnerFound { go_first: true })
        .chain(candidates.iter().map(|c| ice(c)))
        .collect();
    assert_eq!(received, expected);
}
