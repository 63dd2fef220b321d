// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streams built from values and futures.

use futures::{future, stream, FutureExt, Stream};
use ripple_core::{RippleError, StreamItem};
use std::error::Error;
use std::future::Future;

/// Emit every value of `values` in order, then complete.
///
/// ```
/// use ripple_stream::of;
/// use ripple_core::StreamItem;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let items: Vec<_> = of([1, 2, 3]).collect().await;
/// assert_eq!(items, vec![StreamItem::Value(1), StreamItem::Value(2), StreamItem::Value(3)]);
/// # }
/// ```
pub fn of<I>(values: I) -> impl Stream<Item = StreamItem<I::Item>> + Send
where
    I: IntoIterator,
    I::IntoIter: Send,
{
    stream::iter(values.into_iter().map(StreamItem::Value))
}

/// Emit the output of `future` once it resolves, then complete.
///
/// The future is not polled until the stream is.
pub fn from_future<F>(future: F) -> impl Stream<Item = StreamItem<F::Output>> + Send
where
    F: Future + Send,
{
    stream::once(future.map(StreamItem::Value))
}

/// Like [`from_future`], but a rejected future becomes an error item.
pub fn from_try_future<F, T, E>(future: F) -> impl Stream<Item = StreamItem<T>> + Send
where
    F: Future<Output = Result<T, E>> + Send,
    E: Error + Send + Sync + 'static,
{
    stream::once(future.map(|result| match result {
        Ok(value) => StreamItem::Value(value),
        Err(e) => StreamItem::Error(RippleError::user_error(e)),
    }))
}

/// A stream that never emits and never completes.
pub fn never<T: Send>() -> impl Stream<Item = StreamItem<T>> + Send {
    stream::pending()
}

/// A stream that completes without emitting.
pub fn empty<T: Send>() -> impl Stream<Item = StreamItem<T>> + Send {
    stream::empty()
}

/// A stream that emits a single error, then completes.
pub fn throw<T: Send>(error: RippleError) -> impl Stream<Item = StreamItem<T>> + Send {
    stream::once(future::ready(StreamItem::Error(error)))
}
