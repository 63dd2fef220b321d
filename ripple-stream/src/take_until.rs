// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::StreamItem;

/// Complete a stream as soon as a notifier speaks.
pub trait TakeUntilExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forward items until `notifier` emits its first value, then complete.
    ///
    /// # Behavior
    ///
    /// - The notifier's first value completes the result without forwarding anything else
    /// - A notifier error is forwarded and ends the result
    /// - A notifier that completes silently is ignored; the source keeps flowing
    /// - The source completing or erroring ends the result as usual
    fn take_until_notified<N, X>(self, notifier: N) -> TakeUntil<Self, N>
    where
        N: Stream<Item = StreamItem<X>>,
    {
        TakeUntil {
            stream: self,
            notifier,
            notifier_done: false,
            done: false,
        }
    }
}

impl<S, T> TakeUntilExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`TakeUntilExt::take_until_notified`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct TakeUntil<S, N> {
    #[pin]
    stream: S,
    #[pin]
    notifier: N,
    notifier_done: bool,
    done: bool,
}

impl<S, N, T, X> Stream for TakeUntil<S, N>
where
    S: Stream<Item = StreamItem<T>>,
    N: Stream<Item = StreamItem<X>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        if !*this.notifier_done {
            match this.notifier.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(_))) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => *this.notifier_done = true,
                Poll::Pending => {}
            }
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Error(e))) => {
                *this.done = true;
                Poll::Ready(Some(StreamItem::Error(e)))
            }
            Poll::Ready(None) => {
                *this.done = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}
