//! # eggsorter-adapter-fixture
//!
//! Static dataset for the dashboard. Holds the values from the appliance
//! mock-ups and serves them through the [`DatasetSource`] port. Nothing is
//! read from hardware and nothing is ever mutated.
//!
//! | Section | Contents |
//! |---------|----------|
//! | device | 33.3 °C, CPU 26 %, RAM 50 %, location label |
//! | counters | 23,450 total, 1,021 today, 57.87 g average, 6 rejected, A–D counts |
//! | logs | four graded weights, live sensor reading, two fault messages |
//!
//! ## Dependency rule
//!
//! Depends on `eggsorter-app` (port traits) and `eggsorter-domain` only.

use eggsorter_app::ports::DatasetSource;
use eggsorter_domain::counters::{EggCounters, GradeCounts};
use eggsorter_domain::device::DeviceStatus;
use eggsorter_domain::error::{EggSorterError, ValidationError};
use eggsorter_domain::grade::Grade;
use eggsorter_domain::logs::{LogBook, WeightLogEntry};
use eggsorter_domain::percent::Percent;

/// In-memory, read-only dataset.
#[derive(Debug, Clone)]
pub struct FixtureDataset {
    device: DeviceStatus,
    counters: EggCounters,
    logs: LogBook,
}

impl FixtureDataset {
    /// Build the fixture, validating every value against domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a fixture value breaks an invariant.
    pub fn new() -> Result<Self, ValidationError> {
        let dataset = Self {
            device: device()?,
            counters: counters(),
            logs: logs()?,
        };
        tracing::debug!(
            weights = dataset.logs.weights.len(),
            errors = dataset.logs.errors.len(),
            "fixture dataset loaded"
        );
        Ok(dataset)
    }
}

fn device() -> Result<DeviceStatus, ValidationError> {
    Ok(DeviceStatus {
        temperature_c: 33.3,
        cpu_load: Percent::new(26)?,
        ram_usage: Percent::new(50)?,
        location: "Location name".to_string(),
    })
}

fn counters() -> EggCounters {
    EggCounters {
        total: 23_450,
        daily_total: 1_021,
        average_weight_g: 57.87,
        rejected: 6,
        grades: GradeCounts {
            a: 2500,
            b: 3000,
            c: 4500,
            d: 1000,
        },
    }
}

fn logs() -> Result<LogBook, ValidationError> {
    Ok(LogBook {
        weights: vec![
            WeightLogEntry::new(68.5, Grade::A)?,
            WeightLogEntry::new(61.41, Grade::B)?,
            WeightLogEntry::new(54.33, Grade::C)?,
            WeightLogEntry::new(47.24, Grade::D)?,
        ],
        sensor: WeightLogEntry::new(61.45, Grade::A)?,
        errors: vec![
            "Egg jam - System stopped".to_string(),
            "Servo not responding".to_string(),
        ],
    })
}

impl DatasetSource for FixtureDataset {
    async fn device_status(&self) -> Result<DeviceStatus, EggSorterError> {
        Ok(self.device.clone())
    }

    async fn counters(&self) -> Result<EggCounters, EggSorterError> {
        Ok(self.counters.clone())
    }

    async fn logs(&self) -> Result<LogBook, EggSorterError> {
        Ok(self.logs.clone())
    }
}
