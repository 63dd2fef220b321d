// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_demo::{ConsolePage, DemoConfig, DemoRunner, Document, InputSimulator};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::from_path(path)?,
        None => DemoConfig::load()?,
    };
    info!(run_for_ms = config.run_for_ms, "starting ripple demo");

    let document = Document::new();
    let mut simulator = InputSimulator::new(document.clone(), config.input.clone());
    let runner = DemoRunner::new(config, Arc::new(ConsolePage::default()), document);

    simulator.start();
    runner.run().await;
    simulator.stop();

    info!("ripple demo finished");
    Ok(())
}
