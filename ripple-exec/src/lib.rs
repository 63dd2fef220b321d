// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running ripple streams: subscribe an [`Observer`], get a [`Subscription`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod observer;
pub mod subscribe;
pub mod subscription;

pub use self::observer::Observer;
pub use self::subscribe::SubscribeExt;
pub use self::subscription::Subscription;
