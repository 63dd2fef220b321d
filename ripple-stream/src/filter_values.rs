// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{future, Stream, StreamExt};
use ripple_core::StreamItem;

/// Keeps the values matching a predicate.
pub trait FilterValuesExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forward only the values for which `predicate` returns `true`.
    ///
    /// Errors are always forwarded.
    fn filter_values<F>(self, mut predicate: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send,
        T: Send,
        F: FnMut(&T) -> bool + Send + 'static,
    {
        self.filter_map(move |item| {
            let keep = match &item {
                StreamItem::Value(value) => predicate(value),
                StreamItem::Error(_) => true,
            };
            future::ready(keep.then_some(item))
        })
    }
}

impl<S, T> FilterValuesExt<T> for S where S: Stream<Item = StreamItem<T>> {}
