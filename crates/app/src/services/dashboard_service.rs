//! Dashboard service: use-cases behind the dashboard's timers and buttons.
//!
//! Periodic loads (`poll_reading`, `load_*`) return the raw
//! [`BackendError`] and log it; the caller decides between flipping the
//! connectivity indicator and a silent no-op. User actions return an
//! [`ActionError`] that converts into an error notification.

use std::fmt::Display;

use chrono::{NaiveDate, TimeZone};
use riego_domain::config::IrrigationConfig;
use riego_domain::history::{HistorySeries, export_file_name};
use riego_domain::reading::Reading;
use riego_domain::statistics::Statistics;

use crate::error::{Action, ActionError, BackendError};
use crate::ports::IrrigationBackend;

/// The raw history export, ready to be offered as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryExport {
    pub file_name: String,
    pub contents: String,
}

/// What was re-fetched after the history was cleared.
///
/// Each follow-up load fails silently, leaving its field `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearedHistory {
    pub statistics: Option<Statistics>,
    pub history: Option<HistorySeries>,
}

/// Application service driving the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService<B> {
    backend: B,
}

impl<B: IrrigationBackend> DashboardService<B> {
    /// Create a new service backed by the given backend adapter.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the current reading.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the caller marks the dashboard disconnected.
    #[tracing::instrument(skip(self))]
    pub async fn poll_reading(&self) -> Result<Reading, BackendError> {
        self.backend
            .fetch_reading()
            .await
            .inspect(|reading| {
                tracing::debug!(
                    humidity = reading.humidity,
                    temperature = reading.temperature,
                    pump_on = reading.pump_on,
                    "reading received"
                );
            })
            .inspect_err(|err| tracing::warn!(error = %err, "failed to poll reading"))
    }

    /// Request the opposite pump state.
    ///
    /// Returns the new pump state on success; the caller's state must only
    /// change in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Backend`] when the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_pump(&self, currently_on: bool) -> Result<bool, ActionError> {
        let requested = !currently_on;
        self.backend
            .set_pump(requested)
            .await
            .inspect_err(|err| tracing::error!(error = %err, requested, "pump toggle failed"))
            .map_err(ActionError::backend(Action::TogglePump))?;
        tracing::info!(pump_on = requested, "pump switched");
        Ok(requested)
    }

    /// Load the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the caller keeps its current configuration.
    #[tracing::instrument(skip(self))]
    pub async fn load_config(&self) -> Result<IrrigationConfig, BackendError> {
        self.backend
            .fetch_config()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load configuration"))
    }

    /// Validate and store a new configuration, returning it on success.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] without contacting the backend when
    /// the configuration breaks an invariant, or [`ActionError::Backend`]
    /// when the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn save_config(
        &self,
        config: IrrigationConfig,
    ) -> Result<IrrigationConfig, ActionError> {
        config
            .validate()
            .inspect_err(|err| tracing::warn!(error = %err, "rejected configuration"))?;
        self.backend
            .save_config(&config)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to save configuration"))
            .map_err(ActionError::backend(Action::SaveConfig))?;
        tracing::info!("configuration saved");
        Ok(config)
    }

    /// Load the statistics snapshot.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the caller ignores it.
    #[tracing::instrument(skip(self))]
    pub async fn load_statistics(&self) -> Result<Statistics, BackendError> {
        self.backend
            .fetch_statistics()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load statistics"))
    }

    /// Fetch the raw history export and name it after `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Backend`] when the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn download_history(&self, today: NaiveDate) -> Result<HistoryExport, ActionError> {
        let contents = self
            .backend
            .fetch_history_csv()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to download history"))
            .map_err(ActionError::backend(Action::DownloadHistory))?;
        Ok(HistoryExport {
            file_name: export_file_name(today),
            contents,
        })
    }

    /// Erase the stored history, then re-fetch statistics and chart data.
    ///
    /// The caller is responsible for asking the operator for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Backend`] when the delete request fails; the
    /// follow-up loads are then skipped.
    #[tracing::instrument(skip(self, tz))]
    pub async fn clear_history<Tz>(
        &self,
        max_points: usize,
        tz: &Tz,
    ) -> Result<ClearedHistory, ActionError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.backend
            .clear_history()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to clear history"))
            .map_err(ActionError::backend(Action::ClearHistory))?;
        tracing::info!("history cleared");
        Ok(ClearedHistory {
            statistics: self.load_statistics().await.ok(),
            history: self.load_history(max_points, tz).await.ok(),
        })
    }

    /// Fetch and parse the history export for charting.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the caller leaves the charts untouched.
    #[tracing::instrument(skip(self, tz))]
    pub async fn load_history<Tz>(
        &self,
        max_points: usize,
        tz: &Tz,
    ) -> Result<HistorySeries, BackendError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let csv = self
            .backend
            .fetch_history_csv()
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "no history available"))?;
        let series = HistorySeries::parse_csv(&csv, max_points, tz);
        tracing::debug!(points = series.len(), "history parsed");
        Ok(series)
    }
}
