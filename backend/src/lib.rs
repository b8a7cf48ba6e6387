//! # Lunar Rust Backend
//!
//! Moon phase engine for a meditation and yoga wellness app.
//!
//! The heart of the crate is a closed-form lunar cycle calculator: given an
//! instant it reports the named phase, cycle day, approximate illumination
//! and the next new and full moons. Around it sit a static phase-to-practice
//! theme table, a lunar calendar built from repeated calculator calls, and an
//! optional REST API via Axum for the app's frontend.
//!
//! ## Architecture
//!
//! - [`models`]: Phase tags, the computed phase value object, themes, calendar
//!   entries and Modified Julian Date handling
//! - [`services`]: The calculator, theme lookup, calendar and clock
//! - [`config`]: TOML configuration with environment overrides
//! - [`error`]: Error types for the fallible edges
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunar_rust::services::{classify_theme, compute_phase};
//!
//! let date = Utc.with_ymd_and_hms(2024, 3, 25, 7, 0, 0).unwrap();
//! let info = compute_phase(date);
//! assert!(info.illumination <= 100);
//!
//! let theme = classify_theme(info.phase);
//! assert!(!theme.suggested_activities.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{LunarError, LunarResult};
