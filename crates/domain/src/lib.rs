//! # eggsorter-domain
//!
//! Pure domain model for the egg-sorter dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, clock readings
//! - Define **Pages** (the four dashboard views) and their headers
//! - Define the **dataset records** the dashboard displays: device status,
//!   egg counters, weight logs, sensor reading, error log
//! - Define **Grades** (A–D) and validated **Percent** values
//! - Contain the display maths (gauge needle rotation, fill widths) and
//!   thousands grouping
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod format;
pub mod gauge;
pub mod time;

pub mod counters;
pub mod device;
pub mod grade;
pub mod logs;
pub mod page;
pub mod percent;
