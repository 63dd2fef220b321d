// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::{RippleError, StreamItem};

/// Emits only the first value, then completes.
pub trait FirstValueExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forward the first value and complete.
    ///
    /// A source that completes without a value yields
    /// [`RippleError::EmptySequence`]. An error arriving first is forwarded instead.
    fn first_value(self) -> FirstValue<Self> {
        FirstValue {
            stream: self,
            done: false,
        }
    }
}

impl<S, T> FirstValueExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`FirstValueExt::first_value`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FirstValue<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S, T> Stream for FirstValue<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        let item = ready!(this.stream.poll_next(cx));
        *this.done = true;
        Poll::Ready(Some(item.unwrap_or_else(|| {
            StreamItem::Error(RippleError::empty_sequence("first_value"))
        })))
    }
}
