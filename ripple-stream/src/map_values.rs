// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use ripple_core::StreamItem;

/// Transforms each value; errors pass through.
pub trait MapValuesExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Apply `f` to every value.
    ///
    /// ```
    /// use ripple_stream::prelude::*;
    /// use ripple_core::StreamItem;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let logs: Vec<_> = of([10.0_f64, 100.0]).map_values(f64::ln).collect().await;
    /// assert_eq!(logs[0], StreamItem::Value(10.0_f64.ln()));
    /// # }
    /// ```
    fn map_values<U, F>(self, mut f: F) -> impl Stream<Item = StreamItem<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.map(move |item| item.map(&mut f))
    }
}

impl<S, T> MapValuesExt<T> for S where S: Stream<Item = StreamItem<T>> {}
