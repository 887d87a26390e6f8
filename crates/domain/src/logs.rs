//! Logs — weight measurements, the live sensor reading and fault messages.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::grade::Grade;

/// One graded weight measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLogEntry {
    /// Weight in grams.
    pub weight_g: f64,
    pub grade: Grade,
}

impl WeightLogEntry {
    /// Build an entry, rejecting weights that cannot come from a load cell.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWeight`] when `weight_g` is negative,
    /// NaN or infinite.
    pub fn new(weight_g: f64, grade: Grade) -> Result<Self, ValidationError> {
        if !weight_g.is_finite() || weight_g < 0.0 {
            return Err(ValidationError::InvalidWeight);
        }
        Ok(Self { weight_g, grade })
    }

    /// Weight without unit, shortest round-trip form (`68.5`, `61.41`).
    #[must_use]
    pub fn weight_label(&self) -> String {
        self.weight_g.to_string()
    }
}

/// The most recent reading of the weighing sensor.
pub type SensorReading = WeightLogEntry;

/// Everything shown on the logs page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogBook {
    /// Measurements in the order they were taken.
    pub weights: Vec<WeightLogEntry>,
    pub sensor: SensorReading,
    /// Fault messages in the order they were raised.
    pub errors: Vec<String>,
}
