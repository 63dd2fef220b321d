// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Accumulating operators: [`scan_values`](ScanValuesExt::scan_values) emits every
//! intermediate state, [`reduce_values`](ScanValuesExt::reduce_values) only the last.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use ripple_core::StreamItem;

/// Stateful accumulation over values.
pub trait ScanValuesExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Fold each value into an accumulator and emit what `f` returns.
    ///
    /// The accumulator starts at `initial` and is private to this stream. Errors pass
    /// through and leave the accumulator untouched.
    ///
    /// ```
    /// use ripple_stream::prelude::*;
    /// use ripple_core::StreamItem;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let highscores: Vec<_> = of([3, 1, 4])
    ///     .scan_values(0, |total: &mut i32, score: &i32| {
    ///         *total += score;
    ///         *total
    ///     })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(
    ///     highscores,
    ///     vec![StreamItem::Value(3), StreamItem::Value(4), StreamItem::Value(8)]
    /// );
    /// # }
    /// ```
    fn scan_values<Acc, U, F>(
        self,
        initial: Acc,
        mut f: F,
    ) -> impl Stream<Item = StreamItem<U>> + Send
    where
        Self: Send,
        Acc: Send + 'static,
        F: FnMut(&mut Acc, &T) -> U + Send + 'static,
    {
        let mut acc = initial;
        self.map(move |item| match item {
            StreamItem::Value(value) => StreamItem::Value(f(&mut acc, &value)),
            StreamItem::Error(e) => StreamItem::Error(e),
        })
    }

    /// Fold every value into an accumulator and emit it once, on completion.
    ///
    /// An empty source emits `initial`. An error is forwarded and ends the stream.
    fn reduce_values<Acc, F>(self, initial: Acc, f: F) -> ReduceValues<Self, Acc, F>
    where
        F: FnMut(Acc, T) -> Acc,
    {
        ReduceValues {
            stream: self,
            acc: Some(initial),
            f,
        }
    }
}

impl<S, T> ScanValuesExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`ScanValuesExt::reduce_values`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ReduceValues<S, Acc, F> {
    #[pin]
    stream: S,
    acc: Option<Acc>,
    f: F,
}

impl<S, T, Acc, F> Stream for ReduceValues<S, Acc, F>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(Acc, T) -> Acc,
{
    type Item = StreamItem<Acc>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // The accumulator is gone once the result or an error went out.
            let Some(acc) = this.acc.take() else {
                return Poll::Ready(None);
            };

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    *this.acc = Some((this.f)(acc, value));
                }
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => return Poll::Ready(Some(StreamItem::Value(acc))),
                Poll::Pending => {
                    *this.acc = Some(acc);
                    return Poll::Pending;
                }
            }
        }
    }
}

