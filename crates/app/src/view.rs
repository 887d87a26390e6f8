//! View models — one fully described variant per page.
//!
//! Every value is already formatted for display; the rendering layer only
//! places strings into markup.

use serde::Serialize;

use eggsorter_domain::counters::EggCounters;
use eggsorter_domain::device::DeviceStatus;
use eggsorter_domain::format::group_thousands;
use eggsorter_domain::gauge;
use eggsorter_domain::logs::{LogBook, WeightLogEntry};
use eggsorter_domain::page::{Header, Page};
use eggsorter_domain::time::ClockReading;

/// Result of one navigation: everything needed to paint the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub page: Page,
    pub header: Header,
    pub clock: ClockReading,
    pub view: View,
}

/// Page content, tagged by page kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum View {
    Home,
    Device(DeviceView),
    Counters(CountersView),
    Logs(LogsView),
}


/// Controller board page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceView {
    pub temperature: String,
    pub cpu: String,
    /// Gauge needle angle in degrees, `-90` at 0% and `90` at 100%.
    pub needle_rotation_deg: f64,
    /// CSS `transform` for the needle.
    pub needle_transform: String,
    pub ram_percent: String,
    /// CSS width of the RAM fill bar.
    pub ram_fill_width: String,
    pub location: String,
    pub live_time: String,
}

impl DeviceView {
    #[must_use]
    pub fn new(status: &DeviceStatus, clock: &ClockReading) -> Self {
        let rotation = gauge::needle_rotation(status.cpu_load);
        Self {
            temperature: status.temperature_label(),
            cpu: status.cpu_label(),
            needle_rotation_deg: rotation,
            needle_transform: gauge::rotate_transform(rotation),
            ram_percent: status.ram_label(),
            ram_fill_width: status.ram_usage.css_width(),
            location: status.location.clone(),
            live_time: clock.time.clone(),
        }
    }
}

/// Egg counters page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountersView {
    pub total: String,
    pub daily_total: String,
    pub average_weight: String,
    pub rejected: String,
    pub grades: Vec<GradeCountView>,
}

/// Count of eggs in one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeCountView {
    pub grade: String,
    pub count: String,
}

impl CountersView {
    #[must_use]
    pub fn new(counters: &EggCounters) -> Self {
        Self {
            total: group_thousands(counters.total),
            daily_total: group_thousands(counters.daily_total),
            average_weight: format!("{} g", counters.average_weight_g),
            rejected: group_thousands(counters.rejected),
            grades: counters
                .grades
                .iter()
                .map(|(grade, count)| GradeCountView {
                    grade: grade.to_string(),
                    count: count.to_string(),
                })
                .collect(),
        }
    }
}

/// Logs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogsView {
    pub rows: Vec<WeightRowView>,
    pub sensor_weight: String,
    pub sensor_grade: String,
    pub errors: Vec<String>,
}

/// One weight-log table row; both cells carry `class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightRowView {
    pub weight: String,
    pub grade: String,
    pub class: String,
}

impl From<&WeightLogEntry> for WeightRowView {
    fn from(entry: &WeightLogEntry) -> Self {
        Self {
            weight: entry.weight_label(),
            grade: entry.grade.to_string(),
            class: entry.grade.row_class(),
        }
    }
}

impl LogsView {
    #[must_use]
    pub fn new(logs: &LogBook) -> Self {
        Self {
            rows: logs.weights.iter().map(WeightRowView::from).collect(),
            sensor_weight: format!("{} g", logs.sensor.weight_label()),
            sensor_grade: logs.sensor.grade.to_string(),
            errors: logs.errors.clone(),
        }
    }
}
