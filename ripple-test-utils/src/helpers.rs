// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use ripple_core::StreamItem;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Waits (up to `timeout_ms`) for the stream to complete.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "Expected the stream to end, but it emitted an item.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: the stream did not end within {timeout_ms}ms");
        }
    }
}

/// Waits (up to `timeout_ms`) for the next item.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            item.expect("Expected an item, but the stream ended")
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: no item received within {timeout_ms}ms");
        }
    }
}

pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value, got error: {e}"),
        None => panic!("Expected a value, but the stream ended"),
    }
}
