// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Registers every demo and owns what they leave running.

use crate::config::DemoConfig;
use crate::demos::{self, Demo};
use crate::dom::Document;
use crate::page::{Page, Printer};
use ripple::{Connection, RippleTask, Subscription};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// What every demo gets to work with.
pub struct DemoContext {
    pub config: DemoConfig,
    pub document: Document,
    pub printer: Printer,
}

/// Everything the demos started, so it can be disposed together.
#[derive(Default)]
pub struct DemoScope {
    current: &'static str,
    subscriptions: Vec<(&'static str, Subscription)>,
    connections: Vec<Connection>,
    tasks: Vec<RippleTask>,
}

impl DemoScope {
    /// Keep a subscription, returning a handle to it.
    pub fn track(&mut self, subscription: Subscription) -> Subscription {
        self.subscriptions.push((self.current, subscription.clone()));
        subscription
    }

    pub fn hold_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Keep a task alive until shutdown.
    pub fn hold_task(&mut self, task: RippleTask) {
        self.tasks.push(task);
    }

    /// Subscriptions started by the demo called `name`.
    pub fn subscriptions_of(&self, name: &str) -> Vec<Subscription> {
        self.subscriptions
            .iter()
            .filter(|(demo, _)| *demo == name)
            .map(|(_, subscription)| subscription.clone())
            .collect()
    }

    /// Subscriptions that have not finished yet.
    pub fn active_count(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|(_, subscription)| !subscription.is_closed())
            .count()
    }

    /// Dispose everything: unsubscribe, disconnect, cancel pending tasks.
    pub fn shutdown(self) {
        let active = self.active_count();
        for (demo, subscription) in &self.subscriptions {
            if !subscription.is_closed() {
                debug!(demo, "unsubscribing");
            }
            subscription.unsubscribe();
        }
        for connection in &self.connections {
            connection.disconnect();
        }
        info!(
            active,
            connections = self.connections.len(),
            tasks = self.tasks.len(),
            "demo scope shut down"
        );
    }
}

pub struct DemoRunner {
    context: DemoContext,
    demos: Vec<Demo>,
}

impl DemoRunner {
    pub fn new(config: DemoConfig, page: Arc<dyn Page>, document: Document) -> Self {
        Self {
            context: DemoContext {
                config,
                document,
                printer: Printer::new(page),
            },
            demos: demos::catalog(),
        }
    }

    /// Keep only the named demos, in registration order.
    #[must_use]
    pub fn only(mut self, names: &[&str]) -> Self {
        self.demos.retain(|demo| names.contains(&demo.name));
        self
    }

    pub fn demo_names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|demo| demo.name).collect()
    }

    /// Register every demo. Must be called within a Tokio runtime.
    ///
    /// A demo that fails to register is logged and skipped; the others still run.
    pub fn start(&self) -> DemoScope {
        let mut scope = DemoScope::default();
        for demo in &self.demos {
            scope.current = demo.name;
            match (demo.run)(&self.context, &mut scope) {
                Ok(()) => debug!(demo = demo.name, "demo registered"),
                Err(e) => error!(demo = demo.name, error = %e, "demo failed to register"),
            }
        }
        info!(demos = self.demos.len(), "all demos registered");
        scope
    }

    /// Register every demo, let them run for `run_for_ms`, then dispose everything.
    pub async fn run(&self) {
        let scope = self.start();
        tokio::time::sleep(Duration::from_millis(self.context.config.run_for_ms)).await;
        scope.shutdown();
    }
}
