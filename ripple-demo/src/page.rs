// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Where the demos render to.

use parking_lot::Mutex;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

/// A page with a single container that collects paragraphs.
///
/// Decouples the demos from the concrete output, so tests can read back what was
/// rendered.
pub trait Page: Send + Sync {
    /// Append one paragraph holding `text` to the container.
    fn append_paragraph(&self, text: &str);
}

/// Prints each paragraph to stdout as `<p>text</p>`.
pub struct ConsolePage {
    container: String,
}

impl ConsolePage {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
        }
    }
}

impl Default for ConsolePage {
    fn default() -> Self {
        Self::new(".container")
    }
}

impl Page for ConsolePage {
    fn append_paragraph(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{} <p>{}</p>", self.container, text);
    }
}

/// Keeps paragraphs in memory. Clones share the same container.
#[derive(Clone, Default)]
pub struct RecordingPage {
    paragraphs: Arc<Mutex<Vec<String>>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraphs(&self) -> Vec<String> {
        self.paragraphs.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.paragraphs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.lock().is_empty()
    }

    /// Number of paragraphs equal to `text`.
    pub fn count(&self, text: &str) -> usize {
        self.paragraphs.lock().iter().filter(|p| *p == text).count()
    }

    /// Paragraphs starting with `prefix`, in render order.
    pub fn starting_with(&self, prefix: &str) -> Vec<String> {
        self.paragraphs
            .lock()
            .iter()
            .filter(|p| p.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl Page for RecordingPage {
    fn append_paragraph(&self, text: &str) {
        self.paragraphs.lock().push(text.to_string());
    }
}

/// Cloneable handle the demos render through.
#[derive(Clone)]
pub struct Printer {
    page: Arc<dyn Page>,
}

impl Printer {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self { page }
    }

    pub fn print(&self, value: impl Display) {
        self.page.append_paragraph(&value.to_string());
    }
}
