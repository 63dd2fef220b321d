// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map each value to an inner stream, keeping only the most recent one alive.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::StreamItem;

/// Switch to a new inner stream on every outer value.
pub trait SwitchMapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Project each value to an inner stream and forward that stream's items.
    ///
    /// # Behavior
    ///
    /// - The current inner stream is drained of every ready item before the next outer
    ///   value is taken, so values an inner stream has on hand are never lost
    /// - A new outer value drops the current inner stream while it is waiting
    /// - The result completes once the outer stream has completed **and** the last
    ///   inner stream has completed
    /// - An error from either side is forwarded and ends the stream
    ///
    /// ```
    /// use ripple_stream::prelude::*;
    /// use ripple_core::StreamItem;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let items: Vec<_> = of([1, 2]).switch_map(|n| of([n * 10, n * 100])).collect().await;
    /// assert_eq!(
    ///     items,
    ///     vec![
    ///         StreamItem::Value(10),
    ///         StreamItem::Value(100),
    ///         StreamItem::Value(20),
    ///         StreamItem::Value(200),
    ///     ]
    /// );
    /// # }
    /// ```
    fn switch_map<U, I, F>(self, f: F) -> SwitchMap<Self, I, F>
    where
        F: FnMut(T) -> I,
        I: Stream<Item = StreamItem<U>>,
    {
        SwitchMap {
            outer: self,
            inner: None,
            f,
            outer_done: false,
        }
    }
}

impl<S, T> SwitchMapExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`SwitchMapExt::switch_map`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SwitchMap<S, I, F> {
    #[pin]
    outer: S,
    #[pin]
    inner: Option<I>,
    f: F,
    outer_done: bool,
}

impl<S, T, I, U, F> Stream for SwitchMap<S, I, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(T) -> I,
    I: Stream<Item = StreamItem<U>>,
{
    type Item = StreamItem<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                match inner.poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(value))) => {
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                    Poll::Ready(Some(StreamItem::Error(e))) => {
                        *this.outer_done = true;
                        this.inner.set(None);
                        return Poll::Ready(Some(StreamItem::Error(e)));
                    }
                    Poll::Ready(None) => this.inner.set(None),
                    Poll::Pending => {}
                }
            }

            if *this.outer_done {
                return if this.inner.is_none() {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                };
            }

            // The inner is pending or gone: only now may the outer switch it out.
            match this.outer.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    let next = (this.f)(value);
                    this.inner.set(Some(next));
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.outer_done = true;
                    this.inner.set(None);
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => *this.outer_done = true,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
