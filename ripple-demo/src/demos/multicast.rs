// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{events, millis};
use crate::dom::DomEvent;
use crate::error::DemoError;
use crate::runner::{DemoContext, DemoScope};
use ripple::prelude::*;
use tokio::time::sleep;
use tracing::warn;

fn random_numbers() -> Observable<f64> {
    Observable::create(|observer| {
        observer.next(fastrand::f64());
        observer.complete();
    })
}

pub fn cold(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let cold = random_numbers();

    for name in ["A", "B"] {
        let printer = ctx.printer.clone();
        scope.track(
            cold.subscribe_stream()
                .subscribe(move |x| printer.print(format!("Cold Subscriber {name}: {x}"))),
        );
    }
    Ok(())
}

pub fn hot(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let tapped = ctx.printer.clone();
    let hot = random_numbers()
        .subscribe_stream()
        .tap(move |x| tapped.print(format!("cold to hot {x}")))
        .publish();

    for name in ["A", "B"] {
        let printer = ctx.printer.clone();
        scope.track(
            hot.subscribe()?
                .subscribe(move |x| printer.print(format!("Hot Subscriber {name}: {x}"))),
        );
    }

    scope.hold_connection(hot.connect());
    Ok(())
}

pub fn subject(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let broadcaster = RippleSubject::<String>::new();

    for name in ["A", "B"] {
        let printer = ctx.printer.clone();
        scope.track(
            broadcaster
                .subscribe()?
                .subscribe(move |message| printer.print(format!("Listener {name}: {message}"))),
        );
    }

    let delay = millis(ctx.config.broadcast_delay_ms);
    scope.hold_task(RippleTask::spawn(move |cancel| async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = sleep(delay) => {
                broadcast(&broadcaster, "Broadcast.");
            }
        }
    }));
    Ok(())
}

/// Push `message` to every listener. Returns `false`, with a warning, once the subject
/// has closed.
fn broadcast(subject: &RippleSubject<String>, message: &str) -> bool {
    match subject.next(message.to_string()) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, message, "broadcast was not delivered");
            false
        }
    }
}

pub fn multicast(ctx: &DemoContext, scope: &mut DemoScope) -> Result<(), DemoError> {
    let tapped = ctx.printer.clone();
    let tappable = events(ctx, "click")
        .tap(move |_| tapped.print("Observable"))
        .multicast(RippleSubject::new);

    for name in ["A", "B"] {
        let printer = ctx.printer.clone();
        scope.track(tappable.subscribe()?.subscribe(move |click: DomEvent| {
            printer.print(format!("tappableSub{name}: {}", click.time_stamp));
        }));
    }

    scope.hold_connection(tappable.connect());
    Ok(())
}
