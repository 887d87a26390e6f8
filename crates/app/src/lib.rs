//! # eggsorter-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DatasetSource` — read the device, counters and logs sections
//!   - `Clock` — current wall-clock time
//! - Define **driving/inbound ports** as use-case structs:
//!   - `NavigationService` — switch page, build header and view model
//!   - `ClockTask` — periodic clock reading with an explicit lifecycle
//! - Build the per-page **view models** the rendering layer consumes
//!
//! ## Dependency rule
//! Depends on `eggsorter-domain` only (plus `tokio` for the clock task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock_task;
pub mod ports;
pub mod services;
pub mod view;
