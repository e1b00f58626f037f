//! Backend port: the irrigation device's HTTP API as seen by the dashboard.
//!
//! Futures are not required to be `Send`: the only production adapter runs
//! on the browser's single-threaded executor.

use std::future::Future;

use riego_domain::config::IrrigationConfig;
use riego_domain::reading::Reading;
use riego_domain::statistics::Statistics;

use crate::error::BackendError;

/// Operations exposed by the irrigation backend.
pub trait IrrigationBackend {
    /// `GET /api/datos`: the current reading.
    fn fetch_reading(&self) -> impl Future<Output = Result<Reading, BackendError>>;

    /// `POST /api/bomba`: switch the pump on or off.
    fn set_pump(&self, on: bool) -> impl Future<Output = Result<(), BackendError>>;

    /// `GET /api/config`: the stored irrigation configuration.
    fn fetch_config(&self) -> impl Future<Output = Result<IrrigationConfig, BackendError>>;

    /// `POST /api/config`: replace the stored irrigation configuration.
    fn save_config(
        &self,
        config: &IrrigationConfig,
    ) -> impl Future<Output = Result<(), BackendError>>;

    /// `GET /api/estadisticas`: aggregated statistics.
    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, BackendError>>;

    /// `GET /api/historico`: the raw CSV history export.
    fn fetch_history_csv(&self) -> impl Future<Output = Result<String, BackendError>>;

    /// `DELETE /api/historico`: erase the stored history.
    fn clear_history(&self) -> impl Future<Output = Result<(), BackendError>>;
}
