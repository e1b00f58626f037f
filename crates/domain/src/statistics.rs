//! Statistics snapshot computed by the device over its stored history.

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Aggregated figures served by the device. Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "humedadPromedio")]
    pub average_humidity: f64,
    #[serde(rename = "temperaturaPromedio")]
    pub average_temperature: f64,
    /// Total pump run time, in seconds. The device may report a fraction.
    #[serde(rename = "tiempoRiegoTotal")]
    pub total_irrigation_secs: f64,
    /// Estimated water use, in litres.
    #[serde(rename = "usoAguaEstimado")]
    pub estimated_water_liters: f64,
}

impl Statistics {
    /// Total irrigation time as `{m}m {s}s`, whole seconds only.
    #[must_use]
    pub fn irrigation_time_label(&self) -> String {
        let total = self.total_irrigation_secs.max(0.0).floor();
        let minutes = (total / SECONDS_PER_MINUTE).floor();
        let seconds = total % SECONDS_PER_MINUTE;
        format!("{minutes:.0}m {seconds:.0}s")
    }

    #[must_use]
    pub fn average_humidity_label(&self) -> String {
        format!("{:.1}%", self.average_humidity)
    }

    #[must_use]
    pub fn average_temperature_label(&self) -> String {
        format!("{:.1}\u{00B0}C", self.average_temperature)
    }

    #[must_use]
    pub fn water_use_label(&self) -> String {
        format!("{:.1} L", self.estimated_water_liters)
    }
}
