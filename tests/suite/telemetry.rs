//! Telemetry engine scenarios

use std::time::Duration;

use aura_engine::{DEFAULT_TICK_INTERVAL, LogLevel, MetaValue, StreamState};

use crate::common::{elapse, telemetry};

#[tokio::test(start_paused = true)]
async fn fresh_engine_is_seeded_and_streaming() {
    let engine = telemetry(&[0.5]);
    assert_eq!(engine.state(), StreamState::Streaming);
    assert_eq!(engine.events().len(), 2);
    assert!(
        engine
            .events()
            .iter()
            .all(|event| event.level() == LogLevel::Info)
    );

    let Some(MetaValue::Text(session)) = engine.events()[0]
        .meta()
        .and_then(|meta| meta.get("session"))
    else {
        panic!("first seed event carries a session id");
    };
    assert_eq!(session.len(), 8);
    assert!(engine.events()[1].meta().is_none());
}

#[tokio::test(start_paused = true)]
async fn paused_engine_appends_nothing() {
    let mut engine = telemetry(&[0.5]);
    engine.toggle();
    assert_eq!(engine.state(), StreamState::Paused);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(engine.process_events(), 0);
    assert_eq!(engine.events().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn one_event_per_interval_while_streaming() {
    let mut engine = telemetry(&[0.5]);

    elapse(DEFAULT_TICK_INTERVAL * 3).await;
    assert_eq!(engine.process_events(), 3);
    assert_eq!(engine.events().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn clear_then_start_then_one_tick() {
    let mut engine = telemetry(&[0.5]);
    engine.stop();
    engine.clear();
    assert!(engine.events().is_empty());

    engine.start();
    elapse(DEFAULT_TICK_INTERVAL).await;
    assert_eq!(engine.process_events(), 1);
    assert_eq!(engine.events().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn clear_while_streaming_keeps_streaming() {
    let mut engine = telemetry(&[0.5]);
    engine.clear();
    assert!(engine.events().is_empty());
    assert!(engine.is_streaming());

    assert!(engine.wait_for_update().await);
    assert_eq!(engine.events().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn toggle_round_trip_resumes_from_now() {
    let mut engine = telemetry(&[0.5]);
    elapse(DEFAULT_TICK_INTERVAL / 2).await;
    engine.toggle();
    engine.toggle();

    // The resumed producer's first tick is a full interval after resuming.
    tokio::time::sleep(DEFAULT_TICK_INTERVAL - Duration::from_millis(10)).await;
    assert_eq!(engine.process_events(), 0);
    elapse(Duration::from_millis(10)).await;
    assert_eq!(engine.process_events(), 1);
}

#[tokio::test(start_paused = true)]
async fn random_fields_stay_in_range() {
    let units = [0.0, 0.124, 0.25, 0.5, 0.74, 0.999_999];
    let mut engine = telemetry(&units);
    engine.clear();

    for _ in 0..40 {
        assert!(engine.wait_for_update().await);
    }

    for event in engine.events() {
        let Some(meta) = event.meta() else { continue };
        if let Some(MetaValue::Int(latency)) = meta.get("latency_ms") {
            assert!((10..=39).contains(latency), "latency {latency}");
        }
        if let Some(MetaValue::Float(confidence)) = meta.get("confidence") {
            assert!((0.70..=0.90).contains(confidence), "confidence {confidence}");
        }
        if let Some(MetaValue::Int(took)) = meta.get("took_ms") {
            assert!((120..=199).contains(took), "took {took}");
        }
    }
}
