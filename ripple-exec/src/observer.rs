// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::RippleError;

type NextHandler<T> = Box<dyn FnMut(T) + Send>;
type ErrorHandler = Box<dyn FnOnce(RippleError) + Send>;
type CompleteHandler = Box<dyn FnOnce() + Send>;

/// Callbacks receiving a stream's notifications.
///
/// `on_next` is required. Without an `on_error` handler an error is logged as
/// unhandled; it still ends the subscription.
///
/// ```
/// use ripple_exec::Observer;
///
/// let observer = Observer::new(|value: i32| println!("{value}"))
///     .on_error(|e| eprintln!("failed: {e}"))
///     .on_complete(|| println!("done"));
/// # drop(observer);
/// ```
pub struct Observer<T> {
    on_next: NextHandler<T>,
    on_error: Option<ErrorHandler>,
    on_complete: Option<CompleteHandler>,
}

impl<T> Observer<T> {
    pub fn new<F>(on_next: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        Self {
            on_next: Box::new(on_next),
            on_error: None,
            on_complete: None,
        }
    }

    #[must_use]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: FnOnce(RippleError) + Send + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    #[must_use]
    pub fn on_complete<F>(mut self, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    pub(crate) fn next(&mut self, value: T) {
        (self.on_next)(value);
    }

    pub(crate) fn error(self, error: RippleError) {
        match self.on_error {
            Some(handler) => handler(error),
            None => error!("unhandled stream error: {}", error),
        }
    }

    pub(crate) fn complete(self) {
        if let Some(handler) = self.on_complete {
            handler();
        }
    }
}
