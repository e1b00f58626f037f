//! Dashboard settings: TOML document with key/value overrides.
//!
//! Every field has a sensible default so the document may be empty.
//! Overrides (browser `localStorage` in production) take precedence over
//! document values and are looked up by the `OVERRIDE_*` keys below.

use serde::Deserialize;

pub const OVERRIDE_API_BASE_URL: &str = "riego.api_base_url";
pub const OVERRIDE_READING_INTERVAL_MS: &str = "riego.reading_interval_ms";
pub const OVERRIDE_HISTORY_INTERVAL_MS: &str = "riego.history_interval_ms";
pub const OVERRIDE_CHART_MAX_POINTS: &str = "riego.chart_max_points";
pub const OVERRIDE_DISMISS_AFTER_MS: &str = "riego.dismiss_after_ms";
pub const OVERRIDE_LOG: &str = "riego.log";

/// Top-level settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Backend location.
    pub api: ApiSettings,
    /// Timer periods.
    pub polling: PollingSettings,
    /// Chart settings.
    pub chart: ChartSettings,
    /// Toast behaviour.
    pub notifications: NotificationSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Backend API configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Prefix for every `/api/*` path; empty means same origin.
    pub base_url: String,
}

/// Poll periods, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    pub reading_interval_ms: u32,
    pub history_interval_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Most recent points kept per chart.
    pub max_points: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub dismiss_after_ms: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardSettings {
    /// Parse `document`, apply overrides from `lookup`, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the resulting
    /// settings are invalid.
    pub fn load(
        document: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::from_toml_str(document)?;
        settings.apply_overrides(lookup);
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a TOML document; missing sections and fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is not valid TOML
    /// for these settings.
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        toml::from_str(document).map_err(SettingsError::Parse)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(OVERRIDE_API_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(Ok(ms)) = lookup(OVERRIDE_READING_INTERVAL_MS).map(|v| v.parse()) {
            self.polling.reading_interval_ms = ms;
        }
        if let Some(Ok(ms)) = lookup(OVERRIDE_HISTORY_INTERVAL_MS).map(|v| v.parse()) {
            self.polling.history_interval_ms = ms;
        }
        if let Some(Ok(points)) = lookup(OVERRIDE_CHART_MAX_POINTS).map(|v| v.parse()) {
            self.chart.max_points = points;
        }
        if let Some(Ok(ms)) = lookup(OVERRIDE_DISMISS_AFTER_MS).map(|v| v.parse()) {
            self.notifications.dismiss_after_ms = ms;
        }
        if let Some(val) = lookup(OVERRIDE_LOG) {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.polling.reading_interval_ms == 0 || self.polling.history_interval_ms == 0 {
            return Err(SettingsError::Validation(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        if self.chart.max_points == 0 {
            return Err(SettingsError::Validation(
                "chart.max_points must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of an API path such as `/api/datos`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api.base_url.trim_end_matches('/'))
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            reading_interval_ms: 5_000,
            history_interval_ms: 60_000,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_points: riego_domain::history::DEFAULT_MAX_POINTS,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 3_000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "riego_domain=info,riego_app=info,riego_dashboard=info".to_string(),
        }
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// TOML parse failure.
    #[error("failed to parse dashboard settings")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid dashboard settings: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_overrides(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.api.base_url, "");
        assert_eq!(settings.polling.reading_interval_ms, 5_000);
        assert_eq!(settings.polling.history_interval_ms, 60_000);
        assert_eq!(settings.chart.max_points, 100);
        assert_eq!(settings.notifications.dismiss_after_ms, 3_000);
    }

    #[test]
    fn should_parse_empty_document() {
        let settings = DashboardSettings::load("", no_overrides).unwrap();
        assert_eq!(settings, DashboardSettings::default());
    }

    #[test]
    fn should_parse_full_document() {
        let toml = "
            [api]
            base_url = 'http://192.168.1.50'

            [polling]
            reading_interval_ms = 2000
            history_interval_ms = 30000

            [chart]
            max_points = 50

            [notifications]
            dismiss_after_ms = 1500

            [logging]
            filter = 'debug'
        ";
        let settings = DashboardSettings::load(toml, no_overrides).unwrap();
        assert_eq!(settings.api.base_url, "http://192.168.1.50");
        assert_eq!(settings.polling.reading_interval_ms, 2_000);
        assert_eq!(settings.polling.history_interval_ms, 30_000);
        assert_eq!(settings.chart.max_points, 50);
        assert_eq!(settings.notifications.dismiss_after_ms, 1_500);
        assert_eq!(settings.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_document_with_defaults() {
        let toml = "
            [polling]
            reading_interval_ms = 1000
        ";
        let settings = DashboardSettings::load(toml, no_overrides).unwrap();
        assert_eq!(settings.polling.reading_interval_ms, 1_000);
        assert_eq!(settings.polling.history_interval_ms, 60_000);
        assert_eq!(settings.chart.max_points, 100);
    }

    #[test]
    fn should_prefer_overrides_over_document() {
        let overrides: HashMap<&str, &str> = HashMap::from([
            (OVERRIDE_API_BASE_URL, "http://riego.local/"),
            (OVERRIDE_READING_INTERVAL_MS, "750"),
            (OVERRIDE_CHART_MAX_POINTS, "20"),
            (OVERRIDE_LOG, "riego_app=trace"),
        ]);
        let toml = "
            [api]
            base_url = 'http://other'
        ";
        let settings =
            DashboardSettings::load(toml, |key| overrides.get(key).map(ToString::to_string))
                .unwrap();
        assert_eq!(settings.api.base_url, "http://riego.local/");
        assert_eq!(settings.polling.reading_interval_ms, 750);
        assert_eq!(settings.chart.max_points, 20);
        assert_eq!(settings.logging.filter, "riego_app=trace");
    }

    #[test]
    fn should_ignore_unparsable_numeric_overrides() {
        let settings = DashboardSettings::load("", |key| {
            (key == OVERRIDE_HISTORY_INTERVAL_MS).then(|| "soon".to_string())
        })
        .unwrap();
        assert_eq!(settings.polling.history_interval_ms, 60_000);
    }

    #[test]
    fn should_reject_zero_interval() {
        let result = DashboardSettings::load(
            "
            [polling]
            reading_interval_ms = 0
            ",
            no_overrides,
        );
        assert!(matches!(result, Err(SettingsError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_chart_capacity() {
        let result = DashboardSettings::load("", |key| {
            (key == OVERRIDE_CHART_MAX_POINTS).then(|| "0".to_string())
        });
        assert!(matches!(result, Err(SettingsError::Validation(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = DashboardSettings::load("invalid {{{", no_overrides);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn should_join_base_url_and_path() {
        let mut settings = DashboardSettings::default();
        assert_eq!(settings.endpoint("/api/datos"), "/api/datos");
        settings.api.base_url = "http://10.0.0.2/".to_string();
        assert_eq!(settings.endpoint("/api/datos"), "http://10.0.0.2/api/datos");
    }
}
