// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_core::{RippleError, StreamItem};
use ripple_stream::prelude::*;
use ripple_test_utils::{test_channel_with_errors, unwrap_value};

#[tokio::test]
async fn scan_values_emits_running_total() -> anyhow::Result<()> {
    // Arrange
    let stream = of([3_u32, 0, 9, 4]).scan_values(0_u32, |highscore, score| {
        *highscore += score;
        *highscore
    });

    // Act
    let totals: Vec<_> = stream.collect().await;

    // Assert
    assert_eq!(
        totals,
        vec![
            StreamItem::Value(3),
            StreamItem::Value(3),
            StreamItem::Value(12),
            StreamItem::Value(16),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn scan_values_keeps_state_across_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut stream = Box::pin(stream.scan_values(Vec::new(), |seen: &mut Vec<i32>, n| {
        seen.push(*n);
        seen.len()
    }));

    // Act
    tx.send(StreamItem::Value(10))?;
    tx.send(StreamItem::Error(RippleError::stream_error("glitch")))?;
    tx.send(StreamItem::Value(20))?;

    // Assert
    assert_eq!(unwrap_value(stream.next().await), 1);
    assert!(matches!(stream.next().await, Some(StreamItem::Error(_))));
    assert_eq!(unwrap_value(stream.next().await), 2);

    Ok(())
}

#[tokio::test]
async fn each_scan_has_its_own_accumulator() -> anyhow::Result<()> {
    // Arrange
    let add = |acc: &mut i32, n: &i32| {
        *acc += n;
        *acc
    };

    // Act
    let a: Vec<_> = of([1, 2]).scan_values(0, add).collect().await;
    let b: Vec<_> = of([1, 2]).scan_values(100, add).collect().await;

    // Assert
    assert_eq!(a, vec![StreamItem::Value(1), StreamItem::Value(3)]);
    assert_eq!(b, vec![StreamItem::Value(101), StreamItem::Value(103)]);

    Ok(())
}

#[tokio::test]
async fn reduce_values_emits_once_on_completion() -> anyhow::Result<()> {
    // Arrange
    let stream = of([1, 2, 3, 4]).reduce_values(0, |acc, n| acc + n);

    // Act
    let items: Vec<_> = stream.collect().await;

    // Assert
    assert_eq!(items, vec![StreamItem::Value(10)]);

    Ok(())
}

#[tokio::test]
async fn reduce_values_on_empty_source_emits_seed() -> anyhow::Result<()> {
    // Arrange
    let stream = empty::<i32>().reduce_values(42, |acc, n| acc + n);

    // Act
    let items: Vec<_> = stream.collect().await;

    // Assert
    assert_eq!(items, vec![StreamItem::Value(42)]);

    Ok(())
}
