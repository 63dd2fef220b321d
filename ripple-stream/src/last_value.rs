// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::{RippleError, StreamItem};

/// Emits only the final value, once the source completes.
pub trait LastValueExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Hold the latest value and forward it when the source completes.
    ///
    /// A source that completes without a value yields
    /// [`RippleError::EmptySequence`]. A source error is forwarded and ends the stream.
    fn last_value(self) -> LastValue<Self, T> {
        LastValue {
            stream: self,
            last: None,
            done: false,
        }
    }
}

impl<S, T> LastValueExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`LastValueExt::last_value`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct LastValue<S, T> {
    #[pin]
    stream: S,
    last: Option<T>,
    done: bool,
}

impl<S, T> Stream for LastValue<S, T>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(StreamItem::Value(value)) => *this.last = Some(value),
                Some(StreamItem::Error(e)) => {
                    *this.done = true;
                    *this.last = None;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                None => {
                    *this.done = true;
                    let item = match this.last.take() {
                        Some(value) => StreamItem::Value(value),
                        None => StreamItem::Error(RippleError::empty_sequence("last_value")),
                    };
                    return Poll::Ready(Some(item));
                }
            }
        }
    }
}
