// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::debounce::DebounceExt;
pub use crate::throttle::ThrottleExt;
pub use crate::timer::{interval, timer};
