//! Reading: one sensor snapshot reported by the irrigation device.

use serde::{Deserialize, Serialize};

use crate::config::IrrigationConfig;
use crate::status::{HumidityStatus, TemperatureBand};

/// Temperature mapped to a full gauge, in degrees Celsius.
const TEMPERATURE_GAUGE_MAX: f64 = 50.0;

/// A live reading as served by the device. Replaced wholesale on every poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Soil humidity in percent (0–100).
    #[serde(rename = "humedad")]
    pub humidity: f64,
    /// Air temperature in degrees Celsius.
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "bomba")]
    pub pump_on: bool,
    #[serde(rename = "alerta")]
    pub alert: bool,
    #[serde(rename = "ultimaAlerta", default)]
    pub last_alert: String,
    /// Device-side timestamp, passed through verbatim.
    #[serde(default, deserialize_with = "timestamp_as_text")]
    pub timestamp: String,
}

impl Reading {
    #[must_use]
    pub fn humidity_status(&self, config: &IrrigationConfig) -> HumidityStatus {
        config.humidity_status(self.humidity)
    }

    #[must_use]
    pub fn temperature_band(&self) -> TemperatureBand {
        TemperatureBand::classify(self.temperature)
    }

    /// Width of the humidity gauge, in percent of its track.
    #[must_use]
    pub fn humidity_gauge_percent(&self) -> f64 {
        self.humidity.clamp(0.0, 100.0)
    }

    /// Width of the temperature gauge, in percent of its track (50 °C = full).
    #[must_use]
    pub fn temperature_gauge_percent(&self) -> f64 {
        (self.temperature / TEMPERATURE_GAUGE_MAX * 100.0).clamp(0.0, 100.0)
    }

    /// The device alert message, if the alert flag is raised and a message is set.
    #[must_use]
    pub fn active_alert(&self) -> Option<&str> {
        (self.alert && !self.last_alert.is_empty()).then_some(self.last_alert.as_str())
    }
}

/// Accept the device timestamp as a string or a bare number (uptime/epoch).
fn timestamp_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(humidity: f64, temperature: f64) -> Reading {
        Reading {
            humidity,
            temperature,
            ..Reading::default()
        }
    }

    #[test]
    fn should_deserialize_device_payload() {
        let json = r#"{
            "humedad": 42.5,
            "temperatura": 21.3,
            "bomba": true,
            "alerta": false,
            "ultimaAlerta": "",
            "timestamp": "2024-05-01 10:00:00"
        }"#;
        let r: Reading = serde_json::from_str(json).unwrap();
        assert!((r.humidity - 42.5).abs() < f64::EPSILON);
        assert!((r.temperature - 21.3).abs() < f64::EPSILON);
        assert!(r.pump_on);
        assert!(!r.alert);
        assert_eq!(r.timestamp, "2024-05-01 10:00:00");
    }

    #[test]
    fn should_accept_numeric_timestamp_and_missing_alert_text() {
        let json = r#"{"humedad": 10, "temperatura": 5, "bomba": false, "alerta": true, "timestamp": 123456}"#;
        let r: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(r.timestamp, "123456");
        assert!(r.last_alert.is_empty());
        assert_eq!(r.active_alert(), None);
    }

    #[test]
    fn should_expose_alert_only_when_flag_and_message_present() {
        let mut r = Reading {
            alert: true,
            last_alert: "Sensor disconnected".to_string(),
            ..Reading::default()
        };
        assert_eq!(r.active_alert(), Some("Sensor disconnected"));
        r.alert = false;
        assert_eq!(r.active_alert(), None);
    }

    #[test]
    fn should_clamp_humidity_gauge() {
        assert!((reading(120.0, 0.0).humidity_gauge_percent() - 100.0).abs() < f64::EPSILON);
        assert!(reading(-3.0, 0.0).humidity_gauge_percent().abs() < f64::EPSILON);
        assert!((reading(55.5, 0.0).humidity_gauge_percent() - 55.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_scale_temperature_gauge_to_fifty_degrees() {
        assert!((reading(0.0, 25.0).temperature_gauge_percent() - 50.0).abs() < f64::EPSILON);
        assert!((reading(0.0, 60.0).temperature_gauge_percent() - 100.0).abs() < f64::EPSILON);
        assert!(reading(0.0, -10.0).temperature_gauge_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn should_classify_against_config() {
        let config = IrrigationConfig::default();
        assert_eq!(reading(10.0, 10.0).humidity_status(&config), HumidityStatus::Low);
        assert_eq!(reading(10.0, 10.0).temperature_band(), TemperatureBand::Cold);
    }
}
