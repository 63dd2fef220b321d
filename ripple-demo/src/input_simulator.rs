// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A scripted user: clicks and mouse-move bursts on a fixed cadence.

use crate::config::InputConfig;
use crate::dom::Document;
use ripple::{CancellationToken, RippleTask};
use std::time::Duration;
use tokio::select;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;
/// Pixels between consecutive moves of one burst.
const BURST_STEP: i32 = 7;

pub struct InputSimulator {
    document: Document,
    config: InputConfig,
    task: Option<RippleTask>,
}

impl InputSimulator {
    pub fn new(document: Document, config: InputConfig) -> Self {
        Self {
            document,
            config,
            task: None,
        }
    }

    /// Start dispatching events. Must be called within a Tokio runtime.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let document = self.document.clone();
        let config = self.config.clone();
        self.task = Some(RippleTask::spawn(move |cancel| {
            Self::run(document, config, cancel)
        }));
    }

    pub fn stop(&mut self) {
        self.task = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    async fn run(document: Document, config: InputConfig, cancel: CancellationToken) {
        let click_every = Duration::from_millis(config.click_every_ms);
        let move_every = Duration::from_millis(config.mousemove_every_ms);
        let mut clicks = interval_at(Instant::now() + click_every, click_every);
        let mut moves = interval_at(Instant::now() + move_every, move_every);

        info!("input simulator started");

        loop {
            select! {
                _ = cancel.cancelled() => break,
                _ = clicks.tick() => {
                    let event = document.click(fastrand::i32(0..WIDTH), fastrand::i32(0..HEIGHT));
                    debug!(x = event.x, y = event.y, "simulated click");
                }
                _ = moves.tick() => {
                    let mut x = fastrand::i32(0..WIDTH);
                    let y = fastrand::i32(0..HEIGHT);
                    for _ in 0..config.mousemove_burst {
                        document.mouse_move(x, y);
                        x = x.saturating_add(BURST_STEP);
                    }
                    debug!(burst = config.mousemove_burst, "simulated mouse moves");
                }
            }
        }

        info!("input simulator stopped");
    }
}
