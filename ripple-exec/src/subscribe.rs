// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Attaching observers to streams.
//!
//! [`SubscribeExt::subscribe`] spawns a Tokio task that pulls the stream and calls the
//! observer for every item, returning a [`Subscription`] right away. Must be called
//! within a Tokio runtime.
//!
//! # Termination
//!
//! A subscription ends at the first of:
//! - the stream completing (`on_complete` runs)
//! - an error item (`on_error` runs, or the error is logged as unhandled)
//! - [`Subscription::unsubscribe`] (no callback runs)
//!
//! In every case the stream is dropped before the subscription reports closed.

use crate::{Observer, Subscription};
use futures::{Stream, StreamExt};
use ripple_core::{CancellationToken, StreamItem};

/// Subscribe observers to a stream of [`StreamItem`]s.
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Call `on_next` for every value.
    ///
    /// ```
    /// use ripple_exec::SubscribeExt;
    /// use ripple_core::StreamItem;
    /// use futures::stream;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let subscription = stream::iter([StreamItem::Value("hello")])
    ///     .subscribe(|greeting| println!("{greeting}"));
    /// subscription.closed().await;
    /// # }
    /// ```
    fn subscribe<F>(self, on_next: F) -> Subscription
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(T) + Send + 'static,
    {
        self.subscribe_with(Observer::new(on_next))
    }

    /// Deliver every notification to `observer`.
    fn subscribe_with(self, observer: Observer<T>) -> Subscription
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        let cancel = CancellationToken::new();
        let done = CancellationToken::new();
        let subscription = Subscription::new(cancel.clone(), done.clone());

        tokio::spawn(async move {
            let ending = drive(self, observer, &cancel).await;
            debug!("subscription ended: {}", ending);
            done.cancel();
        });

        subscription
    }
}

impl<S, T> SubscribeExt<T> for S where S: Stream<Item = StreamItem<T>> {}

async fn drive<S, T>(
    stream: S,
    mut observer: Observer<T>,
    cancel: &CancellationToken,
) -> &'static str
where
    S: Stream<Item = StreamItem<T>>,
{
    let mut stream = std::pin::pin!(stream);

    loop {
        let item = tokio::select! {
            biased;
            _ = cancel.cancelled() => return "unsubscribed",
            item = stream.next() => item,
        };

        // Unsubscribe may land while the item was in flight.
        if cancel.is_cancelled() {
            return "unsubscribed";
        }

        match item {
            Some(StreamItem::Value(value)) => observer.next(value),
            Some(StreamItem::Error(e)) => {
                observer.error(e);
                return "errored";
            }
            None => {
                observer.complete();
                return "completed";
            }
        }
    }
}
