// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_core::{RippleError, StreamItem};
use ripple_stream::prelude::*;
use ripple_stream_time::timer;
use ripple_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, test_channel_with_errors,
    unwrap_value,
};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn new_click_cancels_pending_timer() -> anyhow::Result<()> {
    // Arrange
    let (clicks, stream) = test_channel::<&str>();
    let mut switched = Box::pin(stream.switch_map(|_| timer(Duration::from_millis(1000))));

    // Act
    clicks.send("click")?;
    assert_no_element_emitted(&mut switched, 500).await;
    clicks.send("click")?;

    // Assert
    assert_no_element_emitted(&mut switched, 999).await;
    assert_eq!(unwrap_value(switched.next().await), 0);
    assert_no_element_emitted(&mut switched, 2000).await;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn separate_clicks_each_complete_their_timer() -> anyhow::Result<()> {
    // Arrange
    let (clicks, stream) = test_channel::<u8>();
    let mut switched = Box::pin(stream.switch_map(|_| timer(Duration::from_millis(100))));

    // Act & Assert
    clicks.send(1)?;
    assert_eq!(unwrap_value(switched.next().await), 0);
    sleep(Duration::from_millis(500)).await;
    clicks.send(2)?;
    assert_eq!(unwrap_value(switched.next().await), 0);

    Ok(())
}

#[tokio::test]
async fn completes_after_outer_and_last_inner_complete() -> anyhow::Result<()> {
    // Arrange
    let (outer, stream) = test_channel::<i32>();
    let mut switched = Box::pin(stream.switch_map(|n| of([n, n + 1])));

    // Act
    outer.send(10)?;
    drop(outer);

    // Assert
    assert_eq!(unwrap_value(switched.next().await), 10);
    assert_eq!(unwrap_value(switched.next().await), 11);
    assert_stream_ended(&mut switched, 100).await;

    Ok(())
}

#[tokio::test]
async fn outer_error_ends_the_stream() -> anyhow::Result<()> {
    // Arrange
    let (outer, stream) = test_channel_with_errors::<i32>();
    let mut switched = Box::pin(stream.switch_map(|n| of([n])));

    // Act
    outer.send(StreamItem::Error(RippleError::stream_error("outer failed")))?;

    // Assert
    assert!(matches!(switched.next().await, Some(StreamItem::Error(_))));
    assert!(switched.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn ready_inner_values_are_emitted_before_switching() -> anyhow::Result<()> {
    // Arrange
    let switched = of([1, 2]).switch_map(|n| of([n * 10, n * 100]));

    // Act
    let items: Vec<_> = switched.collect().await;

    // Assert
    assert_eq!(
        items,
        vec![
            StreamItem::Value(10),
            StreamItem::Value(100),
            StreamItem::Value(20),
            StreamItem::Value(200),
        ]
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn waiting_inner_is_dropped_when_outer_has_a_value_ready() -> anyhow::Result<()> {
    // Arrange
    let (outer, stream) = test_channel::<u64>();
    let mut switched = Box::pin(stream.switch_map(|delay| {
        timer(Duration::from_millis(delay)).map_values(move |_| delay)
    }));

    // Act
    outer.send(100)?;
    outer.send(300)?;
    drop(outer);

    // Assert
    assert_eq!(unwrap_value(switched.next().await), 300);
    assert_stream_ended(&mut switched, 500).await;

    Ok(())
}
