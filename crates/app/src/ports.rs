//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The dashboard reaches the device only through [`IrrigationBackend`].

pub mod backend;

pub use backend::IrrigationBackend;
