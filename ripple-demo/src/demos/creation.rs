// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{events, millis};
use crate::demo_value::DemoValue;
use crate::dom::DomEvent;
use crate::error::DemoError;
use crate::runner::{DemoContext, DemoScope};
use chrono::{Local, Timelike};
use ripple::prelude::*;
use tokio::time::sleep;
use tracing::info;

pub fn from_scratch(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let observable = Observable::create(|observer| {
        observer.next("hello");
        observer.next("world");
    });

    let printer = ctx.printer.clone();
    scope.track(observable.subscribe_stream().subscribe(move |v| printer.print(v)));
    Ok(())
}

pub fn mouse_event(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let clicks = events(ctx, "click");
    scope.track(clicks.subscribe(|click: DomEvent| {
        info!(x = click.x, y = click.y, time_stamp = click.time_stamp, "click");
    }));
    Ok(())
}

pub fn from_promise(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let delay = millis(ctx.config.promise_delay_ms);
    let promise = async move {
        sleep(delay).await;
        "resolved!"
    };

    let printer = ctx.printer.clone();
    scope.track(from_future(promise).subscribe(move |v| printer.print(v)));
    Ok(())
}

pub fn from_timer(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let done = ctx.printer.clone();
    let subscription = timer(millis(ctx.config.timer_delay_ms))
        .finalize(move || done.print("timer done!"))
        .subscribe(move |_| printer.print("ding!"));

    scope.track(subscription);
    Ok(())
}

pub fn from_interval(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = interval(millis(ctx.config.clock_interval_ms))
        .subscribe(move |_| printer.print(Local::now().second()));

    scope.track(subscription);
    Ok(())
}

pub fn anything(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let values = vec![
        DemoValue::text("anything"),
        DemoValue::list(["you", "want"]),
        DemoValue::Number(1.0),
        DemoValue::Bool(false),
        DemoValue::record([("name", "huh")]),
    ];

    let printer = ctx.printer.clone();
    scope.track(of(values).subscribe(move |v| printer.print(v)));
    Ok(())
}
