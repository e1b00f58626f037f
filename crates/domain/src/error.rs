//! Domain error types.
//!
//! Each layer defines its own typed errors; the application layer wraps
//! [`DomainError`] via `#[from]`.

/// Errors raised when a domain invariant is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A time of day was not in `HH:MM` form or out of range.
    #[error("invalid time of day {0:?}, expected HH:MM")]
    InvalidTimeOfDay(String),

    /// A humidity threshold exceeded 100 %.
    #[error("humidity threshold {0} is above 100%")]
    ThresholdOutOfRange(u8),

    /// The low threshold is not strictly below the high threshold.
    #[error("low humidity threshold {low} must be below high threshold {high}")]
    ThresholdOrder { low: u8, high: u8 },

    /// The irrigation interval must be at least one minute.
    #[error("irrigation interval must be greater than zero")]
    ZeroInterval,

    /// A numeric form field did not hold a whole number in range.
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
