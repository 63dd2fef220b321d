// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{events, millis};
use crate::dom::DomEvent;
use crate::error::DemoError;
use crate::runner::{DemoContext, DemoScope};
use ripple::prelude::*;
use tokio::time::sleep;
use tracing::info;

pub fn manual_unsubscribe(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let done = ctx.printer.clone();
    let subscription = scope.track(
        interval(millis(ctx.config.unsubscribe_interval_ms))
            .finalize(move || done.print("toUnsub Done"))
            .subscribe(move |n| printer.print(n)),
    );

    let after = millis(ctx.config.unsubscribe_after_ms);
    scope.hold_task(RippleTask::spawn(move |cancel| async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = sleep(after) => {
                info!("disposing the interval subscription");
                subscription.unsubscribe();
            }
        }
    }));
    Ok(())
}

pub fn throttle(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = events(ctx, "mousemove")
        .throttle(millis(ctx.config.throttle_ms))
        .subscribe(move |event: DomEvent| printer.print(format!("Throttled mouseover: {event}")));

    scope.track(subscription);
    Ok(())
}

pub fn debounce(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = events(ctx, "mousemove")
        .debounce(millis(ctx.config.debounce_ms))
        .subscribe(move |event: DomEvent| printer.print(format!("Debounced mouseover: {event}")));

    scope.track(subscription);
    Ok(())
}

pub fn take_until(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let breaker = ctx.printer.clone();
    let subscription = interval(millis(ctx.config.continuous_interval_ms))
        .take_until_notified(timer(millis(ctx.config.breaker_ms)))
        .finalize(move || breaker.print("combo breaker!"))
        .subscribe(move |n| printer.print(n));

    scope.track(subscription);
    Ok(())
}
