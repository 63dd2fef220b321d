// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # ripple
//!
//! Reactive streams on top of `futures::Stream` and Tokio.
//!
//! - **Sources**: cold [`Observable`]s, [`of`], [`from_future`], [`from_event`],
//!   [`timer`], [`interval`], and hot [`RippleSubject`]s
//! - **Operators**: extension traits such as [`MapValuesExt`], [`SwitchMapExt`],
//!   [`ThrottleExt`]
//! - **Multicasting**: [`ConnectableExt::publish`] / [`ConnectableExt::multicast`]
//! - **Execution**: [`SubscribeExt::subscribe`] returns a [`Subscription`]
//!
//! ```
//! use ripple::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let subscription = interval(Duration::from_millis(10))
//!     .take_until_notified(timer(Duration::from_millis(35)))
//!     .finalize(|| println!("done"))
//!     .subscribe(|tick| println!("tick {tick}"));
//!
//! subscription.closed().await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod receiver_ext;

pub use receiver_ext::UnboundedReceiverExt;

pub use ripple_core::{
    CancellationToken, ItemStream, RippleError, RippleSubject, RippleTask, StreamItem,
    SubjectError,
};
pub use ripple_exec::{Observer, SubscribeExt, Subscription};
pub use ripple_stream::{
    empty, from_event, from_future, from_try_future, never, of, throw, zip, Connectable,
    ConnectableExt, Connection, Emitter, EventTarget, FilterValuesExt, FinalizeExt,
    FirstValueExt, LastValueExt, MapValuesExt, Observable, ScanValuesExt, SwitchMapExt,
    TakeUntilExt, TapExt, ZipWithExt,
};
pub use ripple_stream_time::{interval, timer, DebounceExt, ThrottleExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::UnboundedReceiverExt;
    pub use ripple_core::{ItemStream, RippleError, RippleSubject, RippleTask, StreamItem};
    pub use ripple_exec::{Observer, SubscribeExt, Subscription};
    pub use ripple_stream::prelude::*;
    pub use ripple_stream_time::prelude::*;
}
