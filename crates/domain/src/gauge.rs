//! Gauge maths for the CPU load dial.

use crate::percent::Percent;

/// Needle angle at 0%, in tenths of a degree.
const NEEDLE_MIN_DECIDEG: i16 = -900;
/// Tenths of a degree swept per percent of load.
const DECIDEG_PER_PERCENT: i16 = 18;

/// Linear map of `0..=100`% onto `-90..=90` degrees.
///
/// Computed in tenths of a degree so every whole percent lands on a value
/// with at most one decimal.
#[must_use]
pub fn needle_rotation(load: Percent) -> f64 {
    let decidegrees = i16::from(load.value()) * DECIDEG_PER_PERCENT + NEEDLE_MIN_DECIDEG;
    f64::from(decidegrees) / 10.0
}

/// CSS `transform` value for a needle at `degrees`.
#[must_use]
pub fn rotate_transform(degrees: f64) -> String {
    format!("rotate({degrees}deg)")
}
