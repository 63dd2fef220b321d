// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use ripple_core::StreamItem;

/// Pair two streams index by index.
pub trait ZipWithExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emit `(a, b)` for the n-th value of each stream.
    ///
    /// Completes as soon as either stream completes with nothing left to pair.
    /// An error from either stream is forwarded and ends the result.
    fn zip_with<R, B>(self, other: R) -> ZipWith<Self, R, T, B>
    where
        R: Stream<Item = StreamItem<B>>,
    {
        zip(self, other)
    }
}

impl<S, T> ZipWithExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Pair two streams index by index. See [`ZipWithExt::zip_with`].
///
/// ```
/// use ripple_stream::{of, zip};
/// use ripple_core::StreamItem;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pairs: Vec<_> = zip(of(["peanut butter", "wine"]), of(["jelly", "cheese", "extra"]))
///     .collect()
///     .await;
/// assert_eq!(
///     pairs,
///     vec![
///         StreamItem::Value(("peanut butter", "jelly")),
///         StreamItem::Value(("wine", "cheese")),
///     ]
/// );
/// # }
/// ```
pub fn zip<L, R, A, B>(left: L, right: R) -> ZipWith<L, R, A, B>
where
    L: Stream<Item = StreamItem<A>>,
    R: Stream<Item = StreamItem<B>>,
{
    ZipWith {
        left,
        right,
        queued_left: None,
        queued_right: None,
        done: false,
    }
}

/// Stream returned by [`zip`] and [`ZipWithExt::zip_with`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct ZipWith<L, R, A, B> {
    #[pin]
    left: L,
    #[pin]
    right: R,
    queued_left: Option<A>,
    queued_right: Option<B>,
    done: bool,
}

impl<L, R, A, B> Stream for ZipWith<L, R, A, B>
where
    L: Stream<Item = StreamItem<A>>,
    R: Stream<Item = StreamItem<B>>,
{
    type Item = StreamItem<(A, B)>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        if this.queued_left.is_none() {
            match this.left.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(a))) => *this.queued_left = Some(a),
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => {}
            }
        }

        if this.queued_right.is_none() {
            match this.right.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(b))) => *this.queued_right = Some(b),
                Poll::Ready(Some(StreamItem::Error(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(StreamItem::Error(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => {}
            }
        }

        match (this.queued_left.take(), this.queued_right.take()) {
            (Some(a), Some(b)) => Poll::Ready(Some(StreamItem::Value((a, b)))),
            (a, b) => {
                *this.queued_left = a;
                *this.queued_right = b;
                Poll::Pending
            }
        }
    }
}
