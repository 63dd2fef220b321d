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

/// Leading-edge throttling.
pub trait ThrottleExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emit a value, then ignore every value for `window`, then repeat.
    ///
    /// This implements **leading throttle** semantics:
    /// - When a value arrives and we are not throttling:
    ///   - Emit the value immediately
    ///   - Start the throttle timer
    ///   - Ignore subsequent values until the timer expires
    /// - When the timer expires:
    ///   - We become ready to accept a new value
    ///
    /// Errors pass through immediately without throttling.
    fn throttle(self, window: Duration) -> Throttle<Self> {
        Throttle {
            stream: self,
            window,
            sleep: None,
            throttling: false,
        }
    }
}

impl<S, T> ThrottleExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`ThrottleExt::throttle`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Throttle<S> {
    #[pin]
    stream: S,
    window: Duration,
    sleep: Option<Pin<Box<Sleep>>>,
    throttling: bool,
}

impl<S, T> Stream for Throttle<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.throttling {
                if let Some(sleep) = this.sleep.as_mut() {
                    // Checking the deadline directly covers a timer whose poll lags the clock.
                    if Instant::now() >= sleep.deadline() || sleep.as_mut().poll(cx).is_ready() {
                        *this.throttling = false;
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if *this.throttling {
                        continue;
                    }

                    let deadline = Instant::now() + *this.window;
                    match this.sleep.as_mut() {
                        Some(sleep) => sleep.as_mut().reset(deadline),
                        None => *this.sleep = Some(Box::pin(sleep_until(deadline))),
                    }
                    *this.throttling = true;
                    return Poll::Ready(Some(StreamItem::Value(value)));
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
