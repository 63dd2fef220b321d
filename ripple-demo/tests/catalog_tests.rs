// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_demo::{DemoConfig, DemoRunner, Document, RecordingPage};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn runner(page: &RecordingPage, document: &Document) -> DemoRunner {
    DemoRunner::new(
        DemoConfig::default(),
        Arc::new(page.clone()),
        document.clone(),
    )
}

#[test]
fn catalog_registers_twenty_two_uniquely_named_demos() {
    // Arrange
    let runner = runner(&RecordingPage::new(), &Document::new());

    // Act
    let names = runner.demo_names();

    // Assert
    assert_eq!(names.len(), 22);
    assert_eq!(names.iter().collect::<HashSet<_>>().len(), 22);
    assert_eq!(names.first(), Some(&"from scratch"));
    assert_eq!(names.last(), Some(&"multicast"));
}

#[test]
fn only_keeps_registration_order() {
    // Arrange
    let runner = runner(&RecordingPage::new(), &Document::new());

    // Act
    let runner = runner.only(&["zip", "map", "unknown"]);

    // Assert
    assert_eq!(runner.demo_names(), vec!["map", "zip"]);
}

#[tokio::test(start_paused = true)]
async fn full_run_renders_one_shot_demos_then_goes_quiet() -> anyhow::Result<()> {
    // Arrange
    let page = RecordingPage::new();
    let document = Document::new();
    let runner = runner(&page, &document);

    // Act
    runner.run().await;
    sleep(Duration::from_millis(10)).await;
    let rendered = page.len();

    document.click(10, 20);
    document.mouse_move(30, 40);
    sleep(Duration::from_millis(6_000)).await;

    // Assert
    for once in ["hello", "world", "resolved!", "ding!", "timer done!", "First: -3", "Last: 3"] {
        assert_eq!(page.count(once), 1, "{once}");
    }
    assert_eq!(page.count("toUnsub Done"), 1);
    assert_eq!(page.count("combo breaker!"), 1);
    assert_eq!(page.count("Listener A: Broadcast."), 1);
    assert_eq!(page.len(), rendered);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn shutdown_unsubscribes_everything_still_running() -> anyhow::Result<()> {
    // Arrange
    let page = RecordingPage::new();
    let document = Document::new();
    let scope = runner(&page, &document)
        .only(&["from interval", "throttle", "multicast"])
        .start();
    sleep(Duration::from_millis(1_500)).await;
    let clock = scope.subscriptions_of("from interval");

    // Act
    let active = scope.active_count();
    scope.shutdown();
    sleep(Duration::from_millis(10)).await;
    let rendered = page.len();
    document.click(1, 1);
    document.mouse_move(2, 2);
    sleep(Duration::from_millis(3_000)).await;

    // Assert
    assert_eq!(active, 4);
    assert_eq!(clock.len(), 1);
    assert!(clock[0].is_unsubscribed());
    assert!(clock[0].is_closed());
    assert_eq!(page.len(), rendered);

    Ok(())
}
