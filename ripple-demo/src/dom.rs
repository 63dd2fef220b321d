// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A stand-in for the browser document: it raises `click` and `mousemove` events.

use parking_lot::Mutex;
use ripple::{never, EventTarget, ItemStream, RippleSubject};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseMove,
}

impl EventKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseMove => "mousemove",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Self::Click),
            "mousemove" => Some(Self::MouseMove),
            _ => None,
        }
    }
}

/// A pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub x: i32,
    pub y: i32,
    /// Milliseconds since the document was created.
    pub time_stamp: f64,
}

impl fmt::Display for DomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.kind.name(), self.x, self.y)
    }
}

struct DocumentInner {
    origin: Instant,
    listeners: Mutex<HashMap<EventKind, RippleSubject<DomEvent>>>,
}

/// The document events are dispatched on. Clones share listeners.
#[derive(Clone)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                origin: Instant::now(),
                listeners: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Raise an event on every current listener of its kind.
    pub fn dispatch(&self, kind: EventKind, x: i32, y: i32) -> DomEvent {
        let event = DomEvent {
            kind,
            x,
            y,
            time_stamp: self.inner.origin.elapsed().as_secs_f64() * 1000.0,
        };

        if let Some(subject) = self.inner.listeners.lock().get(&kind) {
            let _ = subject.next(event.clone());
        }
        event
    }

    pub fn click(&self, x: i32, y: i32) -> DomEvent {
        self.dispatch(EventKind::Click, x, y)
    }

    pub fn mouse_move(&self, x: i32, y: i32) -> DomEvent {
        self.dispatch(EventKind::MouseMove, x, y)
    }

    /// Listeners attached for `kind`; detached listeners are pruned on the next dispatch.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner
            .listeners
            .lock()
            .get(&kind)
            .map_or(0, RippleSubject::subscriber_count)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTarget<DomEvent> for Document {
    fn listen(&self, event_name: &str) -> ItemStream<DomEvent> {
        let Some(kind) = EventKind::from_name(event_name) else {
            return Box::pin(never());
        };

        let mut listeners = self.inner.listeners.lock();
        match listeners.entry(kind).or_default().subscribe() {
            Ok(stream) => stream,
            Err(_) => Box::pin(never()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use ripple::{from_event, StreamItem};

    #[tokio::test]
    async fn listeners_receive_only_their_event_kind() {
        let document = Document::new();
        let mut clicks = from_event(&document, "click");
        let mut moves = from_event(&document, "mousemove");

        document.click(1, 2);
        document.mouse_move(3, 4);

        match clicks.next().await {
            Some(StreamItem::Value(event)) => {
                assert_eq!((event.kind, event.x, event.y), (EventKind::Click, 1, 2));
            }
            other => panic!("expected a click, got {other:?}"),
        }
        match moves.next().await {
            Some(StreamItem::Value(event)) => assert_eq!(event.to_string(), "mousemove at (3, 4)"),
            other => panic!("expected a mouse move, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_names_attach_nothing() {
        let document = Document::new();
        let _keys = document.listen("keydown");

        assert_eq!(document.listener_count(EventKind::Click), 0);
        assert_eq!(document.listener_count(EventKind::MouseMove), 0);
    }

    #[tokio::test]
    async fn dropped_listeners_are_pruned_on_dispatch() {
        let document = Document::new();
        let kept = document.listen("click");
        let dropped = document.listen("click");
        assert_eq!(document.listener_count(EventKind::Click), 2);

        drop(dropped);
        document.click(0, 0);

        assert_eq!(document.listener_count(EventKind::Click), 1);
        drop(kept);
    }
}
