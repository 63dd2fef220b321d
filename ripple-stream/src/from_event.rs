// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streams of named events raised by an event source.

use ripple_core::ItemStream;

/// Something that raises named events, such as a document raising `"click"`.
///
/// Every call to [`listen`](EventTarget::listen) attaches a new listener. A listener
/// is detached by dropping its stream. Names the target never raises yield a stream
/// that simply stays silent.
pub trait EventTarget<E> {
    /// Attach a listener for `event_name`.
    fn listen(&self, event_name: &str) -> ItemStream<E>;
}

impl<E, T: EventTarget<E> + ?Sized> EventTarget<E> for std::sync::Arc<T> {
    fn listen(&self, event_name: &str) -> ItemStream<E> {
        (**self).listen(event_name)
    }
}

/// Stream every `event_name` event raised by `target` from now on.
pub fn from_event<E, Tg>(target: &Tg, event_name: &str) -> ItemStream<E>
where
    Tg: EventTarget<E> + ?Sized,
{
    target.listen(event_name)
}
