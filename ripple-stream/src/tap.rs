// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operator for side-effect observation without modifying the stream.

use futures::{Stream, StreamExt};
use ripple_core::StreamItem;

/// Invokes a side effect for each value without modifying the stream.
pub trait TapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Call `f` with a reference to every value, then forward it unchanged.
    ///
    /// # Behavior
    ///
    /// - **Values**: `f` runs once per value, in order
    /// - **Errors**: pass through without calling `f`
    /// - **Laziness**: nothing runs until the stream is polled, so a tap placed
    ///   before [`publish`](crate::ConnectableExt::publish) runs once per emission no
    ///   matter how many subscribers are attached
    fn tap<F>(self, mut f: F) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send,
        F: FnMut(&T) + Send + 'static,
    {
        self.map(move |item| {
            if let StreamItem::Value(value) = &item {
                f(value);
            }
            item
        })
    }
}

impl<S, T> TapExt<T> for S where S: Stream<Item = StreamItem<T>> {}
