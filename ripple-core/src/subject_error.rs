// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Lifecycle errors raised by [`RippleSubject`](crate::RippleSubject).
///
/// Kept apart from [`RippleError`](crate::RippleError): these are returned to the
/// caller pushing values, never emitted into a stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has completed (or errored) and accepts nothing more.
    #[error("Subject is closed")]
    Closed,
}
