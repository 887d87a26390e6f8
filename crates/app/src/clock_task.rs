//! Clock task — recomputes the header clock on a fixed cadence.
//!
//! [`ClockTask::start`] computes the first reading synchronously, then spawns
//! a background task that publishes a fresh [`ClockReading`] every period
//! through a `watch` channel. Readers always see a complete reading and never
//! block the ticker.

use std::time::Duration;

use chrono::FixedOffset;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use eggsorter_domain::time::ClockReading;

use crate::ports::Clock;

/// Default tick period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running clock task.
pub struct ClockTask {
    handle: JoinHandle<()>,
    readings: watch::Receiver<ClockReading>,
}

impl ClockTask {
    /// Publish the current reading and start ticking every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<C>(clock: C, offset: FixedOffset, period: Duration) -> Self
    where
        C: Clock + 'static,
    {
        let initial = ClockReading::at(clock.now(), offset);
        let (sender, readings) = watch::channel(initial);
        let handle = tokio::spawn(run(clock, offset, period, sender));

        tracing::debug!(?period, %offset, "clock task started");

        Self { handle, readings }
    }

    /// The most recent reading.
    #[must_use]
    pub fn current(&self) -> ClockReading {
        self.readings.borrow().clone()
    }

    /// A receiver that observes every published reading.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.readings.clone()
    }

    /// Abort the ticker and wait for it to wind down.
    pub async fn stop(self) {
        self.handle.abort();
        // A cancelled JoinError is the expected outcome here.
        let _ = self.handle.await;
        tracing::debug!("clock task stopped");
    }
}

async fn run<C: Clock>(
    clock: C,
    offset: FixedOffset,
    period: Duration,
    sender: watch::Sender<ClockReading>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; `start` already published it.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        if sender.is_closed() {
            tracing::debug!("no clock readers left, ticker exiting");
            break;
        }
        let reading = ClockReading::at(clock.now(), offset);
        sender.send_if_modified(|current| {
            if *current == reading {
                false
            } else {
                *current = reading;
                true
            }
        });
    }
}
