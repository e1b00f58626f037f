//! Page-session dashboard state.
//!
//! Handlers overwrite it freely; there is no sequencing between the
//! periodic poll and user actions.

use chrono::NaiveDateTime;
use riego_domain::config::IrrigationConfig;
use riego_domain::reading::Reading;
use riego_domain::schedule::{NextIrrigation, TimeOfDay};
use riego_domain::statistics::Statistics;
use riego_domain::status::{HumidityStatus, TemperatureBand};

/// Whether the last poll reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connection {
    /// No poll has completed yet.
    #[default]
    Pending,
    Connected,
    Disconnected,
}

impl Connection {
    #[must_use]
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Connecting\u{2026}",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

/// Everything the dashboard controller renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub reading: Reading,
    pub config: IrrigationConfig,
    pub statistics: Option<Statistics>,
    pub connection: Connection,
    /// Local wall-clock time of the last successful poll.
    pub last_update: Option<NaiveDateTime>,
}

impl DashboardState {
    /// Replace the reading after a successful poll.
    pub fn apply_reading(&mut self, reading: Reading, received_at: NaiveDateTime) {
        self.reading = reading;
        self.connection = Connection::Connected;
        self.last_update = Some(received_at);
    }

    /// Record a failed poll. The last reading stays on screen.
    pub fn mark_disconnected(&mut self) {
        self.connection = Connection::Disconnected;
    }

    pub fn set_pump(&mut self, on: bool) {
        self.reading.pump_on = on;
    }

    pub fn apply_config(&mut self, config: IrrigationConfig) {
        self.config = config;
    }

    pub fn apply_statistics(&mut self, statistics: Statistics) {
        self.statistics = Some(statistics);
    }

    #[must_use]
    pub fn humidity_status(&self) -> HumidityStatus {
        self.reading.humidity_status(&self.config)
    }

    #[must_use]
    pub fn temperature_band(&self) -> TemperatureBand {
        self.reading.temperature_band()
    }

    #[must_use]
    pub fn next_irrigation(&self, now: TimeOfDay) -> NextIrrigation {
        self.config.next_irrigation(now)
    }

    /// Last update stamp as `dd/mm/YYYY, HH:MM:SS`.
    #[must_use]
    pub fn last_update_label(&self) -> Option<String> {
        self.last_update
            .map(|at| at.format("%d/%m/%Y, %H:%M:%S").to_string())
    }
}
