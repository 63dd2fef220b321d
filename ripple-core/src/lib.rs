// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks shared by every ripple crate.
//!
//! - [`StreamItem`] carries either a value or a terminating [`RippleError`].
//! - [`RippleSubject`] is the hot, multi-subscriber entry point for pushing values.
//! - [`CancellationToken`] and [`RippleTask`] give cooperative disposal of spawned work.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod ripple_error;
pub mod ripple_subject;
pub mod ripple_task;
pub mod stream_item;
pub mod subject_error;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::ripple_error::{Result, RippleError};
pub use self::ripple_subject::RippleSubject;
pub use self::ripple_task::RippleTask;
pub use self::stream_item::{ItemStream, StreamItem};
pub use self::subject_error::SubjectError;
