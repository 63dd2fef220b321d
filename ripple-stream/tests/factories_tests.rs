// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use parking_lot::Mutex;
use ripple_core::{ItemStream, RippleError, RippleSubject, StreamItem};
use ripple_stream::{
    empty, from_event, from_future, from_try_future, never, of, throw, EventTarget,
};
use ripple_test_utils::{assert_no_element_emitted, TestError};
use std::collections::HashMap;
use std::time::Duration;

#[tokio::test]
async fn of_emits_values_in_order_then_completes() -> anyhow::Result<()> {
    // Arrange
    let stream = of(vec![-3, -2, -1, 0, 1, 2, 3]);

    // Act
    let values: Vec<i32> = stream.filter_map(|item| async move { item.ok() }).collect().await;

    // Assert
    assert_eq!(values, vec![-3, -2, -1, 0, 1, 2, 3]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn from_future_emits_after_resolution() -> anyhow::Result<()> {
    // Arrange
    let mut stream = Box::pin(from_future(async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        "resolved!"
    }));

    // Act & Assert
    assert_no_element_emitted(&mut stream, 999).await;
    assert_eq!(stream.next().await, Some(StreamItem::Value("resolved!")));
    assert!(stream.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn from_try_future_turns_rejection_into_error() -> anyhow::Result<()> {
    // Arrange
    let mut stream = Box::pin(from_try_future(async {
        Err::<i32, _>(TestError::new("rejected"))
    }));

    // Act
    let item = stream.next().await;

    // Assert
    assert!(matches!(item, Some(StreamItem::Error(RippleError::UserError(_)))));
    assert!(stream.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn empty_never_and_throw() -> anyhow::Result<()> {
    // Arrange
    let mut silent = Box::pin(never::<i32>());
    let mut nothing = Box::pin(empty::<i32>());
    let mut failing = Box::pin(throw::<i32>(RippleError::stream_error("nope")));

    // Act & Assert
    assert_no_element_emitted(&mut silent, 50).await;
    assert!(nothing.next().await.is_none());
    assert!(matches!(failing.next().await, Some(StreamItem::Error(_))));
    assert!(failing.next().await.is_none());

    Ok(())
}

struct Button {
    listeners: Mutex<HashMap<String, RippleSubject<u32>>>,
}

impl Button {
    fn new() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
        }
    }

    fn raise(&self, event_name: &str, payload: u32) {
        if let Some(subject) = self.listeners.lock().get(event_name) {
            let _ = subject.next(payload);
        }
    }
}

impl EventTarget<u32> for Button {
    fn listen(&self, event_name: &str) -> ItemStream<u32> {
        let mut listeners = self.listeners.lock();
        let subject = listeners.entry(event_name.to_string()).or_default();
        match subject.subscribe() {
            Ok(stream) => stream,
            Err(_) => Box::pin(futures::stream::empty()),
        }
    }
}

#[tokio::test]
async fn from_event_receives_only_the_named_event() -> anyhow::Result<()> {
    // Arrange
    let button = Button::new();
    let mut clicks = from_event(&button, "click");
    let mut hovers = from_event(&button, "hover");

    // Act
    button.raise("click", 1);
    button.raise("click", 2);

    // Assert
    assert_eq!(clicks.next().await, Some(StreamItem::Value(1)));
    assert_eq!(clicks.next().await, Some(StreamItem::Value(2)));
    assert_no_element_emitted(&mut hovers, 50).await;

    Ok(())
}
