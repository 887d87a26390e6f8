//! Page — the four dashboard views and their header styling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;

/// Identifier of a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// The menu page.
    #[default]
    Home,
    /// Controller board telemetry.
    Device,
    /// Egg totals and grade counts.
    Counters,
    /// Weight log, live sensor reading and error log.
    Logs,
}

impl Page {
    /// Every page, in menu order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Device, Self::Counters, Self::Logs];

    /// Lowercase name used in URLs and serialized forms.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Device => "device",
            Self::Counters => "counters",
            Self::Logs => "logs",
        }
    }

    /// Whether the page displays dataset values.
    ///
    /// Only the menu is purely static.
    #[must_use]
    pub fn needs_data(self) -> bool {
        !matches!(self, Self::Home)
    }

    /// Header styling and title for this page.
    #[must_use]
    pub fn header(self) -> Header {
        match self {
            Self::Home => Header {
                class: "header-home",
                title: "AUTO EGG SORTER",
            },
            Self::Device => Header {
                class: "header-device",
                title: "PICO System Info Dashboard",
            },
            Self::Counters => Header {
                class: "header-counters",
                title: "EGGS Info Dashboard",
            },
            Self::Logs => Header {
                class: "header-logs",
                title: "System Log Dashboard",
            },
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| NotFoundError {
                entity: "Page",
                id: s.to_string(),
            })
    }
}

/// Header styling class and title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub class: &'static str,
    pub title: &'static str,
}
