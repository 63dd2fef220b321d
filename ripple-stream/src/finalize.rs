// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use pin_project::{pin_project, pinned_drop};
use ripple_core::StreamItem;

/// Run a callback when a stream is done with, however that happens.
pub trait FinalizeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Call `callback` exactly once: when the source completes, or when the stream is
    /// dropped (unsubscribed, or torn down after an error), whichever comes first.
    fn finalize<F>(self, callback: F) -> Finalize<Self, F>
    where
        F: FnOnce(),
    {
        Finalize {
            stream: self,
            callback: Some(callback),
        }
    }
}

impl<S, T> FinalizeExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`FinalizeExt::finalize`].
#[pin_project(PinnedDrop)]
#[must_use = "streams do nothing unless polled"]
pub struct Finalize<S, F: FnOnce()> {
    #[pin]
    stream: S,
    callback: Option<F>,
}

impl<S, F, T> Stream for Finalize<S, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnOnce(),
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let item = ready!(this.stream.poll_next(cx));
        if item.is_none() {
            if let Some(callback) = this.callback.take() {
                callback();
            }
        }
        Poll::Ready(item)
    }
}

#[pinned_drop]
impl<S, F: FnOnce()> PinnedDrop for Finalize<S, F> {
    fn drop(self: Pin<&mut Self>) {
        if let Some(callback) = self.project().callback.take() {
            callback();
        }
    }
}
