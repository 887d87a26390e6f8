//! Dataset port — read access to the values the dashboard displays.

use std::future::Future;

use eggsorter_domain::counters::EggCounters;
use eggsorter_domain::device::DeviceStatus;
use eggsorter_domain::error::EggSorterError;
use eggsorter_domain::logs::LogBook;

/// Read-only source of the dashboard's dataset sections.
pub trait DatasetSource {
    /// Controller board telemetry.
    fn device_status(&self) -> impl Future<Output = Result<DeviceStatus, EggSorterError>> + Send;

    /// Production totals and grade counts.
    fn counters(&self) -> impl Future<Output = Result<EggCounters, EggSorterError>> + Send;

    /// Weight log, sensor reading and fault messages.
    fn logs(&self) -> impl Future<Output = Result<LogBook, EggSorterError>> + Send;
}

impl<T: DatasetSource + Send + Sync> DatasetSource for std::sync::Arc<T> {
    fn device_status(&self) -> impl Future<Output = Result<DeviceStatus, EggSorterError>> + Send {
        (**self).device_status()
    }

    fn counters(&self) -> impl Future<Output = Result<EggCounters, EggSorterError>> + Send {
        (**self).counters()
    }

    fn logs(&self) -> impl Future<Output = Result<LogBook, EggSorterError>> + Send {
        (**self).logs()
    }
}
