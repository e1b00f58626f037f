//! HTTP backend adapter wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use riego_app::error::BackendError;
use riego_app::ports::IrrigationBackend;
use riego_app::settings::DashboardSettings;
use riego_domain::config::IrrigationConfig;
use riego_domain::reading::Reading;
use riego_domain::statistics::Statistics;
use serde::{Deserialize, Serialize};

const READING_PATH: &str = "/api/datos";
const PUMP_PATH: &str = "/api/bomba";
const CONFIG_PATH: &str = "/api/config";
const STATISTICS_PATH: &str = "/api/estadisticas";
const HISTORY_PATH: &str = "/api/historico";

/// Body of `POST /api/bomba`.
#[derive(Serialize)]
struct PumpRequest {
    estado: bool,
}

/// JSON error body the device may return on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a transport failure onto the port's error type.
fn transport(err: gloo_net::Error) -> BackendError {
    match err {
        gloo_net::Error::SerdeError(err) => BackendError::Decode(err.to_string()),
        other => BackendError::Network(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, BackendError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => resp.status_text(),
    };
    Err(BackendError::Status { status, message })
}

/// [`IrrigationBackend`] talking to the device over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    settings: DashboardSettings,
}

impl HttpBackend {
    #[must_use]
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.settings.endpoint(path)
    }
}

impl IrrigationBackend for HttpBackend {
    async fn fetch_reading(&self) -> Result<Reading, BackendError> {
        let resp = Request::get(&self.url(READING_PATH))
            .send()
            .await
            .map_err(transport)?;
        let reading: Reading = check_response(resp).await?.json().await.map_err(transport)?;
        Ok(reading)
    }

    async fn set_pump(&self, on: bool) -> Result<(), BackendError> {
        let resp = Request::post(&self.url(PUMP_PATH))
            .json(&PumpRequest { estado: on })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?;
        Ok(())
    }

    async fn fetch_config(&self) -> Result<IrrigationConfig, BackendError> {
        let resp = Request::get(&self.url(CONFIG_PATH))
            .send()
            .await
            .map_err(transport)?;
        let config: IrrigationConfig =
            check_response(resp).await?.json().await.map_err(transport)?;
        Ok(config)
    }

    async fn save_config(&self, config: &IrrigationConfig) -> Result<(), BackendError> {
        let resp = Request::post(&self.url(CONFIG_PATH))
            .json(config)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?;
        Ok(())
    }

    async fn fetch_statistics(&self) -> Result<Statistics, BackendError> {
        let resp = Request::get(&self.url(STATISTICS_PATH))
            .send()
            .await
            .map_err(transport)?;
        let stats: Statistics = check_response(resp).await?.json().await.map_err(transport)?;
        Ok(stats)
    }

    async fn fetch_history_csv(&self) -> Result<String, BackendError> {
        let resp = Request::get(&self.url(HISTORY_PATH))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?.text().await.map_err(transport)
    }

    async fn clear_history(&self) -> Result<(), BackendError> {
        let resp = Request::delete(&self.url(HISTORY_PATH))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?;
        Ok(())
    }
}
