// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A tour of ripple.
//!
//! Each demo builds one small pipeline against a simulated [`Document`] and renders
//! every emission as a paragraph on a [`Page`]. [`DemoRunner`] registers them all in a
//! fixed order, lets them run, then disposes everything they left running.

pub mod config;
pub mod demo_value;
pub mod demos;
pub mod dom;
pub mod error;
pub mod input_simulator;
pub mod page;
pub mod runner;

pub use config::{DemoConfig, InputConfig};
pub use demo_value::DemoValue;
pub use dom::{Document, DomEvent, EventKind};
pub use error::DemoError;
pub use input_simulator::InputSimulator;
pub use page::{ConsolePage, Page, Printer, RecordingPage};
pub use runner::{DemoContext, DemoRunner, DemoScope};
