// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream factories and value operators for ripple.
//!
//! Every operator here works on streams of [`StreamItem<T>`](ripple_core::StreamItem)
//! and is exposed as an extension trait, so pipelines read left to right:
//!
//! ```
//! use ripple_stream::prelude::*;
//! use ripple_core::StreamItem;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let shouted: Vec<_> = of(["Simon", "Garfunkel"])
//!     .map_values(|name| name.to_uppercase())
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     shouted,
//!     vec![
//!         StreamItem::Value("SIMON".to_string()),
//!         StreamItem::Value("GARFUNKEL".to_string()),
//!     ]
//! );
//! # }
//! ```
//!
//! ## Factories
//!
//! | Factory | Emits |
//! |---------|-------|
//! | [`Observable::create`] | whatever the producer emits, once per subscription |
//! | [`of`] | each given value, then completes |
//! | [`from_future`] / [`from_try_future`] | the resolved value (or error), then completes |
//! | [`from_event`] | every named event raised by an [`EventTarget`] |
//!
//! ## Operators
//!
//! | Operator | Trait |
//! |----------|-------|
//! | `map_values` | [`MapValuesExt`] |
//! | `filter_values` | [`FilterValuesExt`] |
//! | `tap` | [`TapExt`] |
//! | `first_value` | [`FirstValueExt`] |
//! | `last_value` | [`LastValueExt`] |
//! | `scan_values`, `reduce_values` | [`ScanValuesExt`] |
//! | `switch_map` | [`SwitchMapExt`] |
//! | `take_until_notified` | [`TakeUntilExt`] |
//! | `finalize` | [`FinalizeExt`] |
//! | `zip_with` | [`ZipWithExt`] |
//! | `publish`, `multicast` | [`ConnectableExt`] |

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod connectable;
pub mod factories;
pub mod filter_values;
pub mod finalize;
pub mod first_value;
pub mod from_event;
pub mod last_value;
pub mod map_values;
pub mod observable;
pub mod prelude;
pub mod scan_values;
pub mod switch_map;
pub mod take_until;
pub mod tap;
pub mod zip_with;

pub use self::connectable::{Connectable, ConnectableExt, Connection};
pub use self::factories::{empty, from_future, from_try_future, never, of, throw};
pub use self::filter_values::FilterValuesExt;
pub use self::finalize::{Finalize, FinalizeExt};
pub use self::first_value::{FirstValue, FirstValueExt};
pub use self::from_event::{from_event, EventTarget};
pub use self::last_value::{LastValue, LastValueExt};
pub use self::map_values::MapValuesExt;
pub use self::observable::{Emitter, Observable};
pub use self::scan_values::{ReduceValues, ScanValuesExt};
pub use self::switch_map::{SwitchMap, SwitchMapExt};
pub use self::take_until::{TakeUntil, TakeUntilExt};
pub use self::tap::TapExt;
pub use self::zip_with::{zip, ZipWith, ZipWithExt};
