//! Time helpers and the localized clock reading shown in the header.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// UTC timestamp used as the clock's source of truth.
pub type Timestamp = DateTime<Utc>;

/// Offset of the appliance's local time (`Asia/Kuala_Lumpur`, UTC+8).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 8 * 60;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a fixed UTC offset from a number of minutes east of UTC.
///
/// # Errors
///
/// Returns [`ValidationError::UtcOffsetOutOfRange`] when the offset is not
/// strictly within ±24h.
pub fn utc_offset(minutes: i32) -> Result<FixedOffset, ValidationError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ValidationError::UtcOffsetOutOfRange(minutes))
}

/// Date, weekday and time-of-day strings for one clock tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Long US date, e.g. `October 19, 2026`.
    pub date: String,
    /// Full weekday name, e.g. `Monday`.
    pub weekday: String,
    /// 24-hour time of day, e.g. `09:05:20`.
    pub time: String,
}

impl ClockReading {
    /// Format `instant` in the given local offset.
    #[must_use]
    pub fn at(instant: Timestamp, offset: FixedOffset) -> Self {
        let local = instant.with_timezone(&offset);
        Self {
            date: local.format("%B %-d, %Y").to_string(),
            weekday: local.format("%A").to_string(),
            time: local.format("%H:%M:%S").to_string(),
        }
    }
}
