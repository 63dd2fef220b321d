// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::StreamItem;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant, Sleep};

/// Trailing-edge debouncing.
pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emit a value only after `quiet` has passed without a newer one.
    ///
    /// # Behavior
    ///
    /// - Every value restarts the quiet timer and replaces the pending value
    /// - When the timer fires, the pending value is emitted
    /// - When the source completes, a pending value is emitted immediately
    /// - Errors discard the pending value and pass through at once
    fn debounce(self, quiet: Duration) -> Debounce<Self, T> {
        Debounce {
            stream: self,
            quiet,
            sleep: None,
            pending: None,
            stream_ended: false,
        }
    }
}

impl<S, T> DebounceExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`DebounceExt::debounce`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Debounce<S, T> {
    #[pin]
    stream: S,
    quiet: Duration,
    sleep: Option<Pin<Box<Sleep>>>,
    pending: Option<T>,
    stream_ended: bool,
}

impl<S, T> Stream for Debounce<S, T>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.stream_ended {
                return Poll::Ready(this.pending.take().map(StreamItem::Value));
            }

            if this.pending.is_some() {
                if let Some(sleep) = this.sleep.as_mut() {
                    if sleep.as_mut().poll(cx).is_ready() {
                        return Poll::Ready(this.pending.take().map(StreamItem::Value));
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    let deadline = Instant::now() + *this.quiet;
                    match this.sleep.as_mut() {
                        Some(sleep) => sleep.as_mut().reset(deadline),
                        None => *this.sleep = Some(Box::pin(sleep_until(deadline))),
                    }
                    *this.pending = Some(value);
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.pending = None;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => *this.stream_ended = true,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
