// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_core::StreamItem;
use ripple_stream::FinalizeExt;
use ripple_stream_time::{interval, timer};
use ripple_test_utils::{assert_no_element_emitted, unwrap_value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn timer_emits_zero_once_then_completes() -> anyhow::Result<()> {
    // Arrange
    let done = Arc::new(AtomicBool::new(false));
    let done_clone = done.clone();
    let mut ding = Box::pin(
        timer(Duration::from_millis(2000)).finalize(move || done_clone.store(true, Ordering::SeqCst)),
    );

    // Act & Assert
    assert_no_element_emitted(&mut ding, 1999).await;
    assert_eq!(ding.next().await, Some(StreamItem::Value(0)));
    assert!(!done.load(Ordering::SeqCst));
    assert!(ding.next().await.is_none());
    assert!(done.load(Ordering::SeqCst));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn interval_counts_from_zero_one_period_apart() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let mut ticks = Box::pin(interval(Duration::from_millis(500)));

    // Act
    let mut seen = Vec::new();
    let mut at = Vec::new();
    for _ in 0..4 {
        seen.push(unwrap_value(ticks.next().await));
        at.push(start.elapsed().as_millis());
    }

    // Assert
    assert_eq!(seen, vec![0, 1, 2, 3]);
    for (tick, elapsed) in at.iter().enumerate() {
        let expected = 500 * (tick as u128 + 1);
        assert!((expected..expected + 5).contains(elapsed), "tick {tick} at {elapsed}ms");
    }

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn interval_starts_counting_when_first_polled() -> anyhow::Result<()> {
    // Arrange
    let mut ticks = Box::pin(interval(Duration::from_millis(100)));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    let start = Instant::now();

    // Act
    let first = unwrap_value(ticks.next().await);

    // Assert
    assert_eq!(first, 0);
    assert!((100..105).contains(&start.elapsed().as_millis()));

    Ok(())
}
