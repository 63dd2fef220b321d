// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background tasks that stop when their owner goes away.

use crate::CancellationToken;
use core::future::Future;
use tokio::task::JoinHandle;

/// A spawned tokio task paired with a [`CancellationToken`].
///
/// The closure passed to [`spawn`](Self::spawn) receives the token and is expected to
/// watch it (usually with `tokio::select!` on `cancelled()`). Dropping the `RippleTask`
/// cancels the token, so whoever owns the handle owns the task's lifetime.
///
/// ```rust
/// use ripple_core::RippleTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = RippleTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task); // the spawned future observes cancellation and returns
/// # }
/// ```
#[derive(Debug)]
pub struct RippleTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RippleTask {
    /// Spawn `f(token)` on the current tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(f(cancel.clone()));
        Self { cancel, handle }
    }

    /// Request the task to stop at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Returns `true` once the spawned future has run to completion.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RippleTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
