// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_core::StreamItem;
use ripple_stream::prelude::*;
use ripple_test_utils::{test_channel, unwrap_value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    (count, move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn runs_once_on_completion() -> anyhow::Result<()> {
    // Arrange
    let (count, callback) = counter();
    let mut stream = of(["ding!"]).finalize(callback);

    // Act
    assert_eq!(stream.next().await, Some(StreamItem::Value("ding!")));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(stream.next().await.is_none());
    drop(stream);

    // Assert
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn runs_once_when_dropped_early() -> anyhow::Result<()> {
    // Arrange
    let (count, callback) = counter();
    let (tx, stream) = test_channel::<i32>();
    let mut stream = stream.finalize(callback);

    // Act
    tx.send(1)?;
    assert_eq!(unwrap_value(stream.next().await), 1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    drop(stream);

    // Assert
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn does_not_run_while_the_stream_is_alive() -> anyhow::Result<()> {
    // Arrange
    let (count, callback) = counter();
    let (tx, stream) = test_channel::<i32>();
    let mut stream = stream.finalize(callback);

    // Act
    for n in 0..3 {
        tx.send(n)?;
        let _ = stream.next().await;
    }

    // Assert
    assert_eq!(count.load(Ordering::SeqCst), 0);
    drop(stream);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}
