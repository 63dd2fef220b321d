// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multicasting a single source through a subject.
//!
//! [`publish`](ConnectableExt::publish) and [`multicast`](ConnectableExt::multicast)
//! turn a stream into a [`Connectable`]. Subscribers attach to the inner subject
//! whenever they like, but the source is not polled until [`Connectable::connect`]
//! is called. From then on the source runs **once**, and every item it produces is
//! broadcast to all current subscribers. Side effects placed upstream (such as
//! [`tap`](crate::TapExt::tap)) therefore run once per emission, not once per
//! subscriber.
//!
//! ## Lifecycle
//!
//! - Source completes: the subject completes, ending every subscriber stream
//! - Source errors: the error is broadcast, then the subject completes
//! - [`Connection::disconnect`]: the source is dropped; subscribers stay attached
//!   but receive nothing further
//!
//! A `Connectable` connects at most once. Its source is a stream, which cannot be
//! restarted, so connecting after a disconnect returns the disconnected handle. Build a
//! new `Connectable` (for example from another
//! [`subscribe_stream`](crate::Observable::subscribe_stream)) to start over.

use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use ripple_core::{ItemStream, RippleSubject, RippleTask, StreamItem, SubjectError};
use std::sync::Arc;

/// Turns a stream into a [`Connectable`].
pub trait ConnectableExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + Send + 'static,
{
    /// Multicast through the subject returned by `subject_factory`.
    fn multicast<F>(self, subject_factory: F) -> Connectable<T>
    where
        Self: Send + 'static,
        F: FnOnce() -> RippleSubject<T>,
    {
        Connectable::new(Box::pin(self), subject_factory())
    }

    /// Multicast through a fresh [`RippleSubject`].
    fn publish(self) -> Connectable<T>
    where
        Self: Send + 'static,
    {
        self.multicast(RippleSubject::new)
    }
}

impl<S, T> ConnectableExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone + Send + 'static,
{
}

struct ConnectState<T> {
    source: Option<ItemStream<T>>,
    connection: Option<Connection>,
}

/// A multicast source that starts when connected. See the [module docs](self).
pub struct Connectable<T: Clone + Send + 'static> {
    subject: RippleSubject<T>,
    state: Arc<Mutex<ConnectState<T>>>,
}

impl<T: Clone + Send + 'static> Connectable<T> {
    fn new(source: ItemStream<T>, subject: RippleSubject<T>) -> Self {
        Self {
            subject,
            state: Arc::new(Mutex::new(ConnectState {
                source: Some(source),
                connection: None,
            })),
        }
    }

    /// Attach a subscriber to the shared subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] once the source has completed or errored.
    pub fn subscribe(&self) -> Result<ItemStream<T>, SubjectError> {
        self.subject.subscribe()
    }

    /// Start pulling the source and broadcasting its items.
    ///
    /// Must be called within a Tokio runtime. Connecting again returns a handle to
    /// the existing connection, even once it has been disconnected.
    pub fn connect(&self) -> Connection {
        let mut state = self.state.lock();
        if let Some(connection) = &state.connection {
            return connection.clone();
        }

        let connection = match state.source.take() {
            Some(source) => Connection::start(source, self.subject.clone()),
            None => Connection::closed(),
        };
        state.connection = Some(connection.clone());
        connection
    }

    /// Returns `true` once [`connect`](Self::connect) has been called.
    pub fn is_connected(&self) -> bool {
        self.state.lock().connection.is_some()
    }

    /// Number of subscribers currently attached to the subject.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + 'static> Clone for Connectable<T> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

/// Handle to a running connection.
///
/// Clones share the same connection. The forwarding task stops when
/// [`disconnect`](Self::disconnect) is called, or when the last handle (including
/// the one kept by the [`Connectable`]) is dropped.
#[derive(Clone)]
pub struct Connection {
    task: Option<Arc<RippleTask>>,
}

impl Connection {
    fn start<T>(mut source: ItemStream<T>, subject: RippleSubject<T>) -> Self
    where
        T: Clone + Send + 'static,
    {
        let task = RippleTask::spawn(move |cancel| async move {
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    item = source.next() => match item {
                        Some(StreamItem::Value(value)) => {
                            if subject.next(value).is_err() {
                                break;
                            }
                        }
                        Some(StreamItem::Error(e)) => {
                            let _ = subject.error(e);
                            break;
                        }
                        None => {
                            subject.complete();
                            break;
                        }
                    }
                }
            }
        });

        Self {
            task: Some(Arc::new(task)),
        }
    }

    const fn closed() -> Self {
        Self { task: None }
    }

    /// Stop pulling the source. Subscribers are not completed.
    pub fn disconnect(&self) {
        if let Some(task) = &self.task {
            task.cancel();
        }
    }

    /// Returns `true` while the source is still being forwarded.
    pub fn is_connected(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| !task.is_cancelled() && !task.is_finished())
    }
}
