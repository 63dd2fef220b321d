// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-driven sources and operators for ripple streams, backed by Tokio timers.
//!
//! - [`timer`] emits `0` once after a delay.
//! - [`interval`] emits `0, 1, 2, ...`, one per period.
//! - [`ThrottleExt::throttle`] keeps the first value of each window (leading edge).
//! - [`DebounceExt::debounce`] keeps the last value of each burst (trailing edge).
//!
//! All of them follow Tokio's clock, so tests can drive them with
//! `tokio::time::pause` / `advance`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod debounce;
pub mod prelude;
pub mod throttle;
pub mod timer;

pub use self::debounce::{Debounce, DebounceExt};
pub use self::throttle::{Throttle, ThrottleExt};
pub use self::timer::{interval, timer};
