//! Irrigation configuration: thresholds, interval, mode and daily schedule.
//!
//! The field names on the wire are the ones the device firmware uses.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::schedule::{NextIrrigation, TimeOfDay, next_irrigation};
use crate::status::HumidityStatus;

const MAX_HUMIDITY: u8 = 100;

/// User-editable irrigation settings stored on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationConfig {
    /// Humidity (%) below which the soil is considered dry.
    #[serde(rename = "umbralHumedadBaja")]
    pub low_humidity_threshold: u8,
    /// Humidity (%) from which the soil is considered well watered.
    #[serde(rename = "umbralHumedadAlta")]
    pub high_humidity_threshold: u8,
    /// Minutes between automatic irrigation checks.
    #[serde(rename = "intervaloRiego")]
    pub irrigation_interval: u32,
    /// Whether the device waters on its own.
    #[serde(rename = "modoAutomatico")]
    pub automatic_mode: bool,
    #[serde(rename = "horaRiego1")]
    pub first_irrigation: TimeOfDay,
    #[serde(rename = "horaRiego2")]
    pub second_irrigation: TimeOfDay,
}

impl Default for IrrigationConfig {
    fn default() -> Self {
        Self {
            low_humidity_threshold: 30,
            high_humidity_threshold: 70,
            irrigation_interval: 60,
            automatic_mode: true,
            first_irrigation: TimeOfDay::MORNING,
            second_irrigation: TimeOfDay::EVENING,
        }
    }
}

impl IrrigationConfig {
    /// Check the invariants the form must satisfy before it is saved.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ThresholdOutOfRange`] when a threshold exceeds
    /// 100, [`DomainError::ThresholdOrder`] when low is not below high, and
    /// [`DomainError::ZeroInterval`] when the interval is zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        for threshold in [self.low_humidity_threshold, self.high_humidity_threshold] {
            if threshold > MAX_HUMIDITY {
                return Err(DomainError::ThresholdOutOfRange(threshold));
            }
        }
        if self.low_humidity_threshold >= self.high_humidity_threshold {
            return Err(DomainError::ThresholdOrder {
                low: self.low_humidity_threshold,
                high: self.high_humidity_threshold,
            });
        }
        if self.irrigation_interval == 0 {
            return Err(DomainError::ZeroInterval);
        }
        Ok(())
    }

    /// Classify a humidity value against this configuration's thresholds.
    #[must_use]
    pub fn humidity_status(&self, humidity: f64) -> HumidityStatus {
        HumidityStatus::classify(
            humidity,
            f64::from(self.low_humidity_threshold),
            f64::from(self.high_humidity_threshold),
        )
    }

    /// The next scheduled irrigation after `now`.
    #[must_use]
    pub fn next_irrigation(&self, now: TimeOfDay) -> NextIrrigation {
        next_irrigation(now, self.first_irrigation, self.second_irrigation)
    }
}

/// The configuration form as typed by the operator, one string per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDraft {
    pub low_humidity_threshold: String,
    pub high_humidity_threshold: String,
    pub irrigation_interval: String,
    pub automatic_mode: bool,
    pub first_irrigation: String,
    pub second_irrigation: String,
}

impl From<&IrrigationConfig> for ConfigDraft {
    fn from(config: &IrrigationConfig) -> Self {
        Self {
            low_humidity_threshold: config.low_humidity_threshold.to_string(),
            high_humidity_threshold: config.high_humidity_threshold.to_string(),
            irrigation_interval: config.irrigation_interval.to_string(),
            automatic_mode: config.automatic_mode,
            first_irrigation: config.first_irrigation.to_string(),
            second_irrigation: config.second_irrigation.to_string(),
        }
    }
}

impl ConfigDraft {
    /// Parse every field and check the result with [`IrrigationConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidNumber`] or
    /// [`DomainError::InvalidTimeOfDay`] for unparsable fields, otherwise
    /// whatever validation reports.
    pub fn parse(&self) -> Result<IrrigationConfig, DomainError> {
        let config = IrrigationConfig {
            low_humidity_threshold: number("low threshold", &self.low_humidity_threshold)?,
            high_humidity_threshold: number("high threshold", &self.high_humidity_threshold)?,
            irrigation_interval: number("interval", &self.irrigation_interval)?,
            automatic_mode: self.automatic_mode,
            first_irrigation: self.first_irrigation.parse()?,
            second_irrigation: self.second_irrigation.parse()?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, DomainError> {
    raw.trim().parse().map_err(|_| DomainError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
