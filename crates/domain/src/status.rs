//! Qualitative status bands for humidity and temperature readings.

use serde::{Deserialize, Serialize};

/// Soil humidity relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumidityStatus {
    /// Below the low threshold; the soil needs watering.
    Low,
    /// At or above the low threshold but below the high one.
    Acceptable,
    /// At or above the high threshold.
    Optimal,
}

impl HumidityStatus {
    /// Classify `humidity` (percent) against the low/high thresholds.
    #[must_use]
    pub fn classify(humidity: f64, low: f64, high: f64) -> Self {
        if humidity < low {
            Self::Low
        } else if humidity < high {
            Self::Acceptable
        } else {
            Self::Optimal
        }
    }

    /// Text shown under the humidity gauge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "\u{26A0}\u{FE0F} Very low - needs watering",
            Self::Acceptable => "\u{2713} Acceptable level",
            Self::Optimal => "\u{2713} Optimal level",
        }
    }

    /// CSS modifier selecting the gauge colour.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "level-low",
            Self::Acceptable => "level-acceptable",
            Self::Optimal => "level-optimal",
        }
    }
}

impl std::fmt::Display for HumidityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Acceptable => f.write_str("acceptable"),
            Self::Optimal => f.write_str("optimal"),
        }
    }
}

/// Fixed air temperature bands, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    /// Below 15 °C.
    Cold,
    /// 15 °C up to 25 °C.
    Normal,
    /// 25 °C up to 35 °C.
    Warm,
    /// 35 °C and above.
    Hot,
}

impl TemperatureBand {
    const COLD_BELOW: f64 = 15.0;
    const NORMAL_BELOW: f64 = 25.0;
    const WARM_BELOW: f64 = 35.0;

    #[must_use]
    pub fn classify(celsius: f64) -> Self {
        if celsius < Self::COLD_BELOW {
            Self::Cold
        } else if celsius < Self::NORMAL_BELOW {
            Self::Normal
        } else if celsius < Self::WARM_BELOW {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Text shown under the temperature gauge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cold => "\u{2744}\u{FE0F} Cold",
            Self::Normal => "\u{2713} Normal",
            Self::Warm => "\u{2600}\u{FE0F} Warm",
            Self::Hot => "\u{1F525} Very hot",
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => f.write_str("cold"),
            Self::Normal => f.write_str("normal"),
            Self::Warm => f.write_str("warm"),
            Self::Hot => f.write_str("hot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_low_below_low_threshold() {
        assert_eq!(HumidityStatus::classify(29.9, 30.0, 70.0), HumidityStatus::Low);
        assert_eq!(HumidityStatus::classify(0.0, 30.0, 70.0), HumidityStatus::Low);
    }

    #[test]
    fn should_classify_acceptable_between_thresholds() {
        assert_eq!(
            HumidityStatus::classify(30.0, 30.0, 70.0),
            HumidityStatus::Acceptable
        );
        assert_eq!(
            HumidityStatus::classify(69.9, 30.0, 70.0),
            HumidityStatus::Acceptable
        );
    }

    #[test]
    fn should_classify_optimal_at_or_above_high_threshold() {
        assert_eq!(HumidityStatus::classify(70.0, 30.0, 70.0), HumidityStatus::Optimal);
        assert_eq!(HumidityStatus::classify(100.0, 30.0, 70.0), HumidityStatus::Optimal);
    }

    #[test]
    fn should_agree_with_threshold_definition_over_whole_range() {
        for tenth in 0..=1000 {
            let h = f64::from(tenth) / 10.0;
            let status = HumidityStatus::classify(h, 35.0, 65.0);
            assert_eq!(status == HumidityStatus::Low, h < 35.0, "h={h}");
            assert_eq!(status == HumidityStatus::Optimal, h >= 65.0, "h={h}");
        }
    }

    #[test]
    fn should_classify_temperature_band_edges() {
        assert_eq!(TemperatureBand::classify(-5.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(14.9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::classify(15.0), TemperatureBand::Normal);
        assert_eq!(TemperatureBand::classify(24.9), TemperatureBand::Normal);
        assert_eq!(TemperatureBand::classify(25.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(34.9), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::classify(35.0), TemperatureBand::Hot);
        assert_eq!(TemperatureBand::classify(48.0), TemperatureBand::Hot);
    }

    #[test]
    fn should_display_lowercase_names() {
        assert_eq!(HumidityStatus::Acceptable.to_string(), "acceptable");
        assert_eq!(TemperatureBand::Warm.to_string(), "warm");
    }

    #[test]
    fn should_expose_distinct_css_classes() {
        assert_eq!(HumidityStatus::Low.css_class(), "level-low");
        assert_ne!(
            HumidityStatus::Acceptable.css_class(),
            HumidityStatus::Optimal.css_class()
        );
    }
}
