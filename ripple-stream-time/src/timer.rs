// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream};
use ripple_core::StreamItem;
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior};

/// Emit `0` once `delay` has elapsed, then complete.
///
/// The delay starts when the stream is first polled.
pub fn timer(delay: Duration) -> impl Stream<Item = StreamItem<u64>> + Send {
    stream::once(async move {
        sleep(delay).await;
        StreamItem::Value(0)
    })
}

/// Emit `0, 1, 2, ...` every `period`, forever.
///
/// The first value arrives one full period after the stream is first polled.
/// A slow consumer delays later ticks rather than receiving a burst.
///
/// # Panics
///
/// Panics on first poll if `period` is zero.
pub fn interval(period: Duration) -> impl Stream<Item = StreamItem<u64>> + Send {
    stream::unfold((None::<Interval>, 0_u64), move |(ticker, count)| async move {
        let mut ticker = ticker.unwrap_or_else(|| {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        ticker.tick().await;
        Some((StreamItem::Value(count), (Some(ticker), count + 1)))
    })
}
