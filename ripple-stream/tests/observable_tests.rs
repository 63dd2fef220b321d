// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{FutureExt, StreamExt};
use ripple_core::{RippleError, StreamItem};
use ripple_stream::Observable;
use ripple_test_utils::{assert_stream_ended, unwrap_stream, unwrap_value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn producer_runs_once_per_subscription() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let runs_clone = runs.clone();
    let observable = Observable::create(move |observer| {
        let run = runs_clone.fetch_add(1, Ordering::SeqCst);
        observer.next(run);
        observer.complete();
    });

    // Act
    let a: Vec<_> = observable.subscribe_stream().collect().await;
    let b: Vec<_> = observable.clone().subscribe_stream().collect().await;

    // Assert
    assert_eq!(runs.load(Ordering::SeqCst), 2);
    assert_eq!(a, vec![StreamItem::Value(0)]);
    assert_eq!(b, vec![StreamItem::Value(1)]);

    Ok(())
}

#[tokio::test]
async fn producer_waits_for_the_first_poll() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let runs_clone = runs.clone();
    let observable = Observable::create(move |observer| {
        runs_clone.fetch_add(1, Ordering::SeqCst);
        observer.next("produced");
    });

    // Act
    let mut stream = observable.subscribe_stream();
    let before_poll = runs.load(Ordering::SeqCst);
    let first = stream.next().await;

    // Assert
    assert_eq!(before_poll, 0);
    assert_eq!(first, Some(StreamItem::Value("produced")));
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn values_emitted_before_complete_are_delivered() -> anyhow::Result<()> {
    // Arrange
    let observable = Observable::create(|observer| {
        observer.next("hello");
        observer.next("world");
        observer.complete();
        observer.next("ignored");
    });

    // Act
    let received: Vec<_> = observable.subscribe_stream().collect().await;

    // Assert
    assert_eq!(
        received,
        vec![StreamItem::Value("hello"), StreamItem::Value("world")]
    );

    Ok(())
}

#[tokio::test]
async fn dropping_every_emitter_completes_the_stream() -> anyhow::Result<()> {
    // Arrange
    let observable = Observable::create(|observer| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            observer.next(42);
        });
    });
    let mut stream = observable.subscribe_stream();

    // Act & Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut stream, 500).await)), 42);
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}

#[tokio::test]
async fn error_is_delivered_then_stream_ends() -> anyhow::Result<()> {
    // Arrange
    let observable = Observable::<i32>::create(|observer| {
        observer.next(1);
        observer.error(RippleError::stream_error("boom"));
    });
    let mut stream = observable.subscribe_stream();

    // Act & Assert
    assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
    assert!(matches!(stream.next().await, Some(StreamItem::Error(_))));
    assert!(stream.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn emitter_reports_closed_after_subscriber_drops() -> anyhow::Result<()> {
    // Arrange
    let (handoff_tx, handoff_rx) = std::sync::mpsc::channel();
    let observable = Observable::<i32>::create(move |observer| {
        let _ = handoff_tx.send(observer);
    });
    let mut stream = observable.subscribe_stream();
    assert!(stream.next().now_or_never().is_none());
    let emitter = handoff_rx.recv()?;
    assert!(!emitter.is_closed());

    // Act
    drop(stream);

    // Assert
    assert!(emitter.is_closed());
    assert!(!emitter.next(1));

    Ok(())
}
