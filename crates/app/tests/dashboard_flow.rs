//! End-to-end flows of the dashboard use-cases.
//!
//! Each test drives a [`DashboardService`] against a scripted backend and
//! applies the outcomes to a [`DashboardState`] the way the browser adapter
//! does, checking the state and notifications the operator would see.

use std::cell::{Cell, RefCell};
use std::future::Future;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use riego_app::error::BackendError;
use riego_app::notification::{Notification, NotificationKind};
use riego_app::ports::IrrigationBackend;
use riego_app::services::dashboard_service::DashboardService;
use riego_app::state::{Connection, DashboardState};
use riego_domain::config::IrrigationConfig;
use riego_domain::reading::Reading;
use riego_domain::statistics::Statistics;
use riego_domain::status::{HumidityStatus, TemperatureBand};

/// A device that can be taken offline between calls.
#[derive(Default)]
struct ScriptedDevice {
    reading: RefCell<Reading>,
    config: RefCell<IrrigationConfig>,
    history: RefCell<String>,
    offline: Cell<bool>,
    config_hangs: Cell<bool>,
}

impl ScriptedDevice {
    fn answer<T>(&self, value: impl FnOnce() -> T) -> Result<T, BackendError> {
        if self.offline.get() {
            Err(BackendError::Network("connection refused".to_string()))
        } else {
            Ok(value())
        }
    }
}

impl IrrigationBackend for &ScriptedDevice {
    fn fetch_reading(&self) -> impl Future<Output = Result<Reading, BackendError>> {
        let result = self.answer(|| self.reading.borrow().clone());
        async { result }
    }

    fn set_pump(&self, on: bool) -> impl Future<Output = Result<(), BackendError>> {
        let result = self.answer(|| self.reading.borrow_mut().pump_on = on);
        async { result }
    }

    fn fetch_config(&self) -> impl Future<Output = Result<IrrigationConfig, BackendError>> {
        let hangs = self.config_hangs.get();
        let result = self.answer(|| self.config.borrow().clone());
        async move {
            if hangs {
                std::future::pending::<()>().await;
            }
            result
        }
    }

    fn save_config(
        &self,
        config: &IrrigationConfig,
    ) -> impl Future<Output = Result<(), BackendError>> {
        let result = self.answer(|| *self.config.borrow_mut() = config.clone());
        async { result }
    }

    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, BackendError>> {
        let rows = self.history.borrow().lines().count().saturating_sub(1);
        let result = self.answer(|| Statistics {
            total_irrigation_secs: 30.0 * f64::from(u32::try_from(rows).unwrap_or_default()),
            ..Statistics::default()
        });
        async { result }
    }

    fn fetch_history_csv(&self) -> impl Future<Output = Result<String, BackendError>> {
        let result = self.answer(|| self.history.borrow().clone());
        async { result }
    }

    fn clear_history(&self) -> impl Future<Output = Result<(), BackendError>> {
        let result = self.answer(|| {
            *self.history.borrow_mut() = "timestamp,humedad,temperatura,bomba,alerta\n".to_string();
        });
        async { result }
    }
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Apply a pump toggle the way the dashboard does and return the toast.
async fn toggle(svc: &DashboardService<&ScriptedDevice>, state: &mut DashboardState) -> Notification {
    match svc.toggle_pump(state.reading.pump_on).await {
        Ok(on) => {
            state.set_pump(on);
            Notification::pump_switched(on)
        }
        Err(err) => Notification::from(&err),
    }
}

#[tokio::test]
async fn should_render_poll_results_and_track_connectivity() {
    let device = ScriptedDevice::default();
    *device.reading.borrow_mut() = Reading {
        humidity: 25.0,
        temperature: 31.0,
        ..Reading::default()
    };
    let svc = DashboardService::new(&device);
    let mut state = DashboardState::default();

    state.apply_config(svc.load_config().await.unwrap());
    state.apply_reading(svc.poll_reading().await.unwrap(), noon());
    assert_eq!(state.connection, Connection::Connected);
    assert_eq!(state.humidity_status(), HumidityStatus::Low);
    assert_eq!(state.temperature_band(), TemperatureBand::Warm);

    device.offline.set(true);
    assert!(svc.poll_reading().await.is_err());
    state.mark_disconnected();
    assert_eq!(state.connection, Connection::Disconnected);
    assert!((state.reading.humidity - 25.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn should_flip_local_pump_flag_only_on_success() {
    let device = ScriptedDevice::default();
    let svc = DashboardService::new(&device);
    let mut state = DashboardState::default();

    let note = toggle(&svc, &mut state).await;
    assert!(state.reading.pump_on);
    assert_eq!(note, Notification::pump_switched(true));

    device.offline.set(true);
    let note = toggle(&svc, &mut state).await;
    assert!(state.reading.pump_on, "flag must not change on failure");
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.text, "Could not control the pump");
}

#[tokio::test]
async fn should_keep_saved_config_and_refresh_schedule() {
    let device = ScriptedDevice::default();
    let svc = DashboardService::new(&device);
    let mut state = DashboardState::default();

    let config = IrrigationConfig {
        first_irrigation: "06:00".parse().unwrap(),
        second_irrigation: "13:30".parse().unwrap(),
        ..IrrigationConfig::default()
    };
    state.apply_config(svc.save_config(config.clone()).await.unwrap());
    assert_eq!(state.config, config);
    assert_eq!(
        state.next_irrigation("12:00".parse().unwrap()).to_string(),
        "13:30"
    );
    assert_eq!(*device.config.borrow(), config);
}

#[tokio::test]
async fn should_clear_history_and_reload_dependents() {
    let device = ScriptedDevice::default();
    *device.history.borrow_mut() = "timestamp,humedad,temperatura,bomba,alerta\n\
                                    2024-06-01T10:00:00Z,40,20,0,0\n\
                                    2024-06-01T10:05:00Z,41,20,0,0\n"
        .to_string();
    let svc = DashboardService::new(&device);
    let mut state = DashboardState::default();

    let series = svc.load_history(100, &Utc).await.unwrap();
    assert_eq!(series.len(), 2);
    state.apply_statistics(svc.load_statistics().await.unwrap());
    assert_eq!(state.statistics.as_ref().unwrap().irrigation_time_label(), "1m 0s");

    let cleared = svc.clear_history(100, &Utc).await.unwrap();
    assert!(cleared.history.unwrap().is_empty());
    state.apply_statistics(cleared.statistics.unwrap());
    assert_eq!(state.statistics.as_ref().unwrap().irrigation_time_label(), "0m 0s");
}

#[tokio::test]
async fn should_load_statistics_while_config_request_hangs() {
    let device = ScriptedDevice::default();
    device.config_hangs.set(true);
    let svc = DashboardService::new(&device);
    let mut state = DashboardState::default();

    let stats = tokio::select! {
        _ = svc.load_config() => panic!("config request should never complete"),
        stats = svc.load_statistics() => stats,
    };
    state.apply_statistics(stats.unwrap());
    assert!(state.statistics.is_some());
    assert_eq!(state.config, IrrigationConfig::default());
}
