// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observables built from a producer callback.
//!
//! [`Observable::create`] stores a producer; every stream returned by
//! [`subscribe_stream`](Observable::subscribe_stream) runs it again against a fresh
//! [`Emitter`]. That is what makes the observable **cold**: two subscribers never share
//! a production run.
//!
//! The producer runs when the stream is first polled, not when it is created. A stream
//! handed to [`publish`](crate::ConnectableExt::publish) therefore produces nothing
//! until the connection starts pulling it.
//!
//! ```
//! use ripple_stream::Observable;
//! use ripple_core::StreamItem;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greetings = Observable::create(|observer| {
//!     observer.next("hello");
//!     observer.next("world");
//! });
//!
//! let received: Vec<_> = greetings.subscribe_stream().collect().await;
//! assert_eq!(received, vec![StreamItem::Value("hello"), StreamItem::Value("world")]);
//! # }
//! ```

use async_channel::Sender;
use futures::{future, stream, StreamExt};
use ripple_core::{ItemStream, RippleError, StreamItem};
use std::sync::Arc;

type Producer<T> = dyn Fn(Emitter<T>) + Send + Sync;

/// A cold observable: a producer that runs once per subscription.
pub struct Observable<T> {
    producer: Arc<Producer<T>>,
}

impl<T: Send + 'static> Observable<T> {
    /// Wrap a producer callback.
    ///
    /// The producer receives an [`Emitter`] and may emit synchronously or move the
    /// emitter into spawned work to emit later. The subscriber's stream completes once
    /// the producer calls [`Emitter::complete`] / [`Emitter::error`] or drops every
    /// clone of its emitter.
    pub fn create<P>(producer: P) -> Self
    where
        P: Fn(Emitter<T>) + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Return a new subscriber's stream. The producer runs for it on first poll.
    pub fn subscribe_stream(&self) -> ItemStream<T> {
        let producer = Arc::clone(&self.producer);
        let deferred = stream::once(future::lazy(move |_| {
            let (tx, rx) = async_channel::unbounded();
            producer(Emitter { tx });
            rx
        }));
        Box::pin(deferred.flatten())
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

/// The observer side handed to a producer.
pub struct Emitter<T> {
    tx: Sender<StreamItem<T>>,
}

impl<T> Emitter<T> {
    /// Emit a value. Returns `false` when nobody is listening any more
    /// (the subscriber went away or the emitter was completed).
    pub fn next(&self, value: T) -> bool {
        self.tx.try_send(StreamItem::Value(value)).is_ok()
    }

    /// Emit an error and complete.
    pub fn error(&self, error: RippleError) {
        let _ = self.tx.try_send(StreamItem::Error(error));
        self.tx.close();
    }

    /// Complete the subscriber's stream. Values already emitted are still delivered.
    pub fn complete(&self) {
        self.tx.close();
    }

    /// Returns `true` once the stream was completed or its subscriber dropped it.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}
