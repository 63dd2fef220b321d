// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{events, millis};
use crate::error::DemoError;
use crate::runner::{DemoContext, DemoScope};
use ripple::prelude::*;

const NUMBER_LIST: [i32; 7] = [-3, -2, -1, 0, 1, 2, 3];

pub fn map(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = of([10.0_f64, 100.0, 1000.0])
        .map_values(f64::ln)
        .subscribe(move |v| printer.print(v));

    scope.track(subscription);
    Ok(())
}

pub fn tap(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let before = ctx.printer.clone();
    let after = ctx.printer.clone();
    let printer = ctx.printer.clone();
    let subscription = of(["Simon", "Garfunkel"])
        .tap(move |name| before.print(name))
        .map_values(|name| name.to_uppercase())
        .tap(move |name| after.print(name))
        .subscribe(move |name| printer.print(name));

    scope.track(subscription);
    Ok(())
}

pub fn filter(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = of(NUMBER_LIST)
        .filter_values(|n| *n > 0)
        .subscribe(move |n| printer.print(n));

    scope.track(subscription);
    Ok(())
}

pub fn first(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = of(NUMBER_LIST)
        .first_value()
        .subscribe(move |n| printer.print(format!("First: {n}")));

    scope.track(subscription);
    Ok(())
}

pub fn last(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let printer = ctx.printer.clone();
    let subscription = of(NUMBER_LIST)
        .last_value()
        .subscribe(move |n| printer.print(format!("Last: {n}")));

    scope.track(subscription);
    Ok(())
}

pub fn scan(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let scored = ctx.printer.clone();
    let printer = ctx.printer.clone();
    let subscription = events(ctx, "click")
        .map_values(|_| fastrand::u32(0..10))
        .tap(move |score| scored.print(format!("Clicked score: {score}")))
        .scan_values(0_u32, |highscore, score| {
            *highscore += score;
            *highscore
        })
        .subscribe(move |highscore| printer.print(format!("Highscore is: {highscore}")));

    scope.track(subscription);
    Ok(())
}

pub fn switch_map(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let delay = millis(ctx.config.switch_timer_ms);
    let printer = ctx.printer.clone();
    let subscription = events(ctx, "click")
        .switch_map(move |_| timer(delay))
        .subscribe(move |i| printer.print(format!("Click to Timer {i}")));

    scope.track(subscription);
    Ok(())
}

pub fn zip(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let yin = of(["peanut butter", "wine", "rainbows"]);
    let yang = of(["jelly", "cheese", "unicorns"]);

    let printer = ctx.printer.clone();
    let subscription = yin
        .zip_with(yang)
        .map_values(|(yin, yang)| format!("{yin}, {yang}"))
        .subscribe(move |pair| printer.print(pair));

    scope.track(subscription);
    Ok(())
}
