//! Percent — a validated `0..=100` integer percentage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Percent(u8);

impl Percent {
    /// Build a percentage, rejecting anything above 100.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PercentOutOfRange`] when `value > 100`.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ValidationError::PercentOutOfRange(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The value as a CSS length, e.g. `50%`.
    #[must_use]
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl TryFrom<u16> for Percent {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u16 {
    fn from(value: Percent) -> Self {
        u16::from(value.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_bounds() {
        assert_eq!(Percent::new(0).unwrap().value(), 0);
        assert_eq!(Percent::new(100).unwrap().value(), 100);
    }

    #[test]
    fn should_reject_values_above_hundred() {
        assert_eq!(
            Percent::new(101),
            Err(ValidationError::PercentOutOfRange(101))
        );
        assert_eq!(
            Percent::new(300),
            Err(ValidationError::PercentOutOfRange(300))
        );
    }

    #[test]
    fn should_format_css_width() {
        assert_eq!(Percent::new(50).unwrap().css_width(), "50%");
    }

    #[test]
    fn should_reject_out_of_range_when_deserializing() {
        let result: Result<Percent, _> = serde_json::from_str("120");
        assert!(result.is_err());
    }
}
