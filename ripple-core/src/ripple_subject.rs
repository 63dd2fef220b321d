// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`RippleSubject`] is both a place to push values (`next`, `error`, `complete`)
//! and a source of streams (`subscribe`).
//!
//! ## Characteristics
//!
//! - **Hot**: subscribers only see items sent after they subscribed.
//! - **Unbounded**: each subscriber has its own unbounded channel; no backpressure.
//! - **Shared**: clones share the same subscriber list.
//! - **Terminal**: `error` broadcasts the error and completes; `complete` ends every
//!   subscriber stream. Both are final.
//!
//! ## Example
//!
//! ```
//! use ripple_core::{RippleSubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let subject = RippleSubject::<&str>::new();
//!
//! let mut listener_a = subject.subscribe().unwrap();
//! let mut listener_b = subject.subscribe().unwrap();
//!
//! subject.next("Broadcast.").unwrap();
//! subject.complete();
//!
//! assert_eq!(listener_a.next().await, Some(StreamItem::Value("Broadcast.")));
//! assert_eq!(listener_b.next().await, Some(StreamItem::Value("Broadcast.")));
//! assert!(listener_a.next().await.is_none());
//! # }
//! ```

use crate::{ItemStream, RippleError, StreamItem, SubjectError};
use async_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<Sender<StreamItem<T>>>,
}

/// A hot subject broadcasting each [`StreamItem`] to every live subscriber.
///
/// See the [module documentation](self) for semantics.
pub struct RippleSubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> RippleSubject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe and receive every item sent from now on.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject has already terminated.
    pub fn subscribe(&self) -> Result<ItemStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Broadcast an item to all live subscribers.
    ///
    /// Subscribers whose stream has been dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject has terminated.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.try_send(item.clone()).is_ok());
        Ok(())
    }

    /// Broadcast a value.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject has terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Broadcast an error, then complete.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] if the subject had already terminated.
    pub fn error(&self, err: RippleError) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.complete();
        result
    }

    /// Complete the subject: every subscriber stream ends after draining what it
    /// already received, and later calls to `send`/`subscribe` fail. Idempotent.
    pub fn complete(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` once the subject has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers still attached.
    ///
    /// Dropped subscribers are removed lazily, on the next `send`.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for RippleSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for RippleSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
