//! # riego-domain
//!
//! Pure domain model for the riego irrigation dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps and time-of-day values
//! - Define the **Reading** (one sensor snapshot reported by the device)
//! - Define the **Irrigation configuration** (thresholds, interval, schedule)
//! - Define the **Statistics** snapshot
//! - Classify humidity and temperature into qualitative bands
//! - Parse the historical CSV export into chart-ready series
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! The backend is reached through the port traits of the `app` crate.

pub mod error;
pub mod time;

pub mod config;
pub mod history;
pub mod reading;
pub mod schedule;
pub mod statistics;
pub mod status;
