// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_demo::{DemoConfig, DemoRunner, DemoScope, Document, RecordingPage};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn start(names: &[&str]) -> (RecordingPage, Document, DemoScope) {
    let page = RecordingPage::new();
    let document = Document::new();
    let scope = DemoRunner::new(
        DemoConfig::default(),
        Arc::new(page.clone()),
        document.clone(),
    )
    .only(names)
    .start();
    (page, document, scope)
}

fn suffix(paragraph: &str) -> &str {
    paragraph.rsplit(": ").next().unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn cold_subscribers_each_get_their_own_run() -> anyhow::Result<()> {
    // Arrange
    let (page, _document, _scope) = start(&["cold"]);

    // Act
    sleep(Duration::from_millis(10)).await;

    // Assert
    assert_eq!(page.starting_with("Cold Subscriber A: ").len(), 1);
    assert_eq!(page.starting_with("Cold Subscriber B: ").len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn hot_subscribers_share_one_production_run() -> anyhow::Result<()> {
    // Arrange
    let (page, _document, _scope) = start(&["hot"]);

    // Act
    sleep(Duration::from_millis(10)).await;

    // Assert
    let produced = page.starting_with("cold to hot ");
    let a = page.starting_with("Hot Subscriber A: ");
    let b = page.starting_with("Hot Subscriber B: ");
    assert_eq!(produced.len(), 1);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(suffix(&a[0]), suffix(&b[0]));
    assert_eq!(produced[0].trim_start_matches("cold to hot "), suffix(&a[0]));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn subject_broadcasts_after_the_delay() -> anyhow::Result<()> {
    // Arrange
    let (page, _document, _scope) = start(&["subject"]);

    // Act
    sleep(Duration::from_millis(500)).await;
    let early = page.len();
    sleep(Duration::from_millis(1_000)).await;

    // Assert
    assert_eq!(early, 0);
    assert_eq!(page.count("Listener A: Broadcast."), 1);
    assert_eq!(page.count("Listener B: Broadcast."), 1);
    assert_eq!(page.len(), 2);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn multicast_runs_the_tap_once_per_click() -> anyhow::Result<()> {
    // Arrange
    let (page, document, scope) = start(&["multicast"]);

    // Act
    let mut stamps = Vec::new();
    for i in 0..3 {
        stamps.push(document.click(i, i).time_stamp);
        sleep(Duration::from_millis(100)).await;
    }

    // Assert
    let expected_a: Vec<String> = stamps.iter().map(|t| format!("tappableSubA: {t}")).collect();
    let expected_b: Vec<String> = stamps.iter().map(|t| format!("tappableSubB: {t}")).collect();
    assert_eq!(page.count("Observable"), 3);
    assert_eq!(page.starting_with("tappableSubA: "), expected_a);
    assert_eq!(page.starting_with("tappableSubB: "), expected_b);
    assert_eq!(scope.active_count(), 2);

    Ok(())
}
