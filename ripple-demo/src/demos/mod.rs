// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The demos, one function each, registered in this order.

mod creation;
mod multicast;
mod operators;
mod timing;

use crate::dom::DomEvent;
use crate::error::DemoError;
use crate::runner::{DemoContext, DemoScope};
use ripple::{from_event, ItemStream};
use std::time::Duration;

pub type DemoFn = fn(&DemoContext, &mut DemoScope) -> Result<(), DemoError>;

#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub run: DemoFn,
}

const fn demo(name: &'static str, run: DemoFn) -> Demo {
    Demo { name, run }
}

pub fn catalog() -> Vec<Demo> {
    vec![
        demo("from scratch", creation::from_scratch),
        demo("mouse event", creation::mouse_event),
        demo("from promise", creation::from_promise),
        demo("from timer", creation::from_timer),
        demo("from interval", creation::from_interval),
        demo("anything", creation::anything),
        demo("cold", multicast::cold),
        demo("hot", multicast::hot),
        demo("manual unsubscribe", timing::manual_unsubscribe),
        demo("map", operators::map),
        demo("tap", operators::tap),
        demo("filter", operators::filter),
        demo("first", operators::first),
        demo("last", operators::last),
        demo("throttle", timing::throttle),
        demo("debounce", timing::debounce),
        demo("scan", operators::scan),
        demo("switch map", operators::switch_map),
        demo("take until", timing::take_until),
        demo("zip", operators::zip),
        demo("subject", multicast::subject),
        demo("multicast", multicast::multicast),
    ]
}

const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn events(ctx: &DemoContext, name: &str) -> ItemStream<DomEvent> {
    from_event(&ctx.document, name)
}
