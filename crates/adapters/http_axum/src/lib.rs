//! # eggsorter-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: one askama template per page, all extending a
//!   shared layout with the header, clock and menu
//! - Serve a small **JSON API** exposing the same screens, the current
//!   dashboard state and the clock (plus an SSE clock stream)
//! - Map HTTP requests into navigation calls (driving adapter)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Navigation is plain links; each request runs one navigation.
//! - Pages use `<meta http-equiv="refresh">` so the clock stays live.
//!
//! ## Dependency rule
//! Depends on `eggsorter-app` (for port traits and services) and
//! `eggsorter-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
