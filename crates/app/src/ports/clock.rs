//! Clock port — source of wall-clock time.

use eggsorter_domain::time::{self, Timestamp};

/// Wall-clock time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Real clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
