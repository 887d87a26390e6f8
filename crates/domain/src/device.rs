//! Device status — telemetry of the sorter's controller board.

use serde::{Deserialize, Serialize};

use crate::percent::Percent;

/// Snapshot of the controller board's health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Board temperature in degrees Celsius.
    pub temperature_c: f64,
    pub cpu_load: Percent,
    pub ram_usage: Percent,
    /// Free-form installation site label.
    pub location: String,
}

impl DeviceStatus {
    /// Temperature with one decimal and unit, e.g. `33.3 °C`.
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{:.1} \u{b0}C", self.temperature_c)
    }

    /// CPU load with a spaced unit suffix, e.g. `26 %`.
    #[must_use]
    pub fn cpu_label(&self) -> String {
        format!("{} %", self.cpu_load)
    }

    /// RAM usage with an attached unit, e.g. `50%`.
    #[must_use]
    pub fn ram_label(&self) -> String {
        format!("{}%", self.ram_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> DeviceStatus {
        DeviceStatus {
            temperature_c: 33.3,
            cpu_load: Percent::new(26).unwrap(),
            ram_usage: Percent::new(50).unwrap(),
            location: "Barn 2".to_string(),
        }
    }

    #[test]
    fn should_label_temperature_with_one_decimal() {
        assert_eq!(status().temperature_label(), "33.3 \u{b0}C");
    }

    #[test]
    fn should_label_cpu_with_spaced_unit() {
        assert_eq!(status().cpu_label(), "26 %");
    }

    #[test]
    fn should_label_ram_with_attached_unit() {
        assert_eq!(status().ram_label(), "50%");
    }
}
