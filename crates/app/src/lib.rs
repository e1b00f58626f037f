//! # riego-app
//!
//! Application layer: use-cases and the **backend port** (trait).
//!
//! ## Responsibilities
//! - Define the `IrrigationBackend` port that HTTP adapters implement
//! - Hold the page-session [`state::DashboardState`] (reading, configuration,
//!   statistics, connectivity)
//! - Provide the dashboard use-cases in [`services::dashboard_service`]:
//!   poll, pump toggle, configuration load/save, statistics, history
//!   export/clear/load
//! - Turn action outcomes into user-facing [`notification::Notification`]s
//! - Load and validate [`settings::DashboardSettings`]
//!
//! ## Dependency rule
//! Depends on `riego-domain` only. Never imports adapter crates or
//! browser APIs. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod notification;
pub mod ports;
pub mod services;
pub mod settings;
pub mod state;
