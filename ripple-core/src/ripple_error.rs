// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for ripple streams.
//!
//! Errors travel in-band as [`StreamItem::Error`](crate::StreamItem::Error) and end the
//! sequence that carries them.
//!
//! # Examples
//!
//! ```
//! use ripple_core::{Result, RippleError};
//!
//! fn first_even(values: &[i32]) -> Result<i32> {
//!     values
//!         .iter()
//!         .copied()
//!         .find(|v| v % 2 == 0)
//!         .ok_or(RippleError::empty_sequence("first_even"))
//! }
//!
//! assert!(first_even(&[1, 3]).is_err());
//! ```

use crate::SubjectError;

/// Root error type for all ripple stream operations.
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// General failure inside a stream pipeline.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error produced by user code (a producer, a future, a callback).
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An operator that needs at least one value saw its source complete empty.
    ///
    /// Raised by `first_value` and `last_value`.
    #[error("No elements in sequence ({operator})")]
    EmptySequence {
        /// Name of the operator that required a value
        operator: &'static str,
    },
}

impl RippleError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create the error emitted when `operator` saw no values.
    #[must_use]
    pub const fn empty_sequence(operator: &'static str) -> Self {
        Self::EmptySequence { operator }
    }

    /// Returns `true` for [`RippleError::EmptySequence`].
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }
}

impl From<SubjectError> for RippleError {
    fn from(error: SubjectError) -> Self {
        Self::stream_error(error.to_string())
    }
}

impl Clone for RippleError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed user errors cannot be cloned; keep the message.
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::EmptySequence { operator } => Self::EmptySequence {
                operator: *operator,
            },
        }
    }
}

/// Specialized Result type for ripple operations.
pub type Result<T> = std::result::Result<T, RippleError>;
