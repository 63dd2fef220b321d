// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenient imports for building pipelines.
//!
//! ```
//! use ripple_stream::prelude::*;
//! ```

pub use crate::connectable::{Connectable, ConnectableExt, Connection};
pub use crate::factories::{empty, from_future, from_try_future, never, of, throw};
pub use crate::filter_values::FilterValuesExt;
pub use crate::finalize::FinalizeExt;
pub use crate::first_value::FirstValueExt;
pub use crate::from_event::{from_event, EventTarget};
pub use crate::last_value::LastValueExt;
pub use crate::map_values::MapValuesExt;
pub use crate::observable::{Emitter, Observable};
pub use crate::scan_values::ScanValuesExt;
pub use crate::switch_map::SwitchMapExt;
pub use crate::take_until::TakeUntilExt;
pub use crate::tap::TapExt;
pub use crate::zip_with::{zip, ZipWithExt};
