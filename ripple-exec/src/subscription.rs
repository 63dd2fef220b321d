// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::CancellationToken;

/// Handle to a running subscription.
///
/// Clones refer to the same subscription. Dropping a handle does **not** end the
/// subscription; call [`unsubscribe`](Self::unsubscribe) for that.
#[derive(Clone, Debug)]
pub struct Subscription {
    cancel: CancellationToken,
    done: CancellationToken,
}

impl Subscription {
    pub(crate) fn new(cancel: CancellationToken, done: CancellationToken) -> Self {
        Self { cancel, done }
    }

    /// Stop delivery and release the source.
    ///
    /// Once this returns no further callback starts. The source stream is dropped
    /// shortly after, which runs any `finalize` callback in the pipeline.
    /// Calling it again, or after completion, does nothing.
    pub fn unsubscribe(&self) {
        self.cancel.cancel();
    }

    /// `true` once `unsubscribe` was called.
    pub fn is_unsubscribed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// `true` once the subscription has finished, for whatever reason, and its
    /// source has been released.
    pub fn is_closed(&self) -> bool {
        self.done.is_cancelled()
    }

    /// Wait until [`is_closed`](Self::is_closed) holds.
    pub async fn closed(&self) {
        self.done.cancelled().await;
    }
}
