// HTTP backend implementation over the simulator's JSON endpoints
use crate::application::telemetry_backend::{BackendError, TelemetryBackend};
use crate::domain::telemetry::{SensorSample, StressStatus, SystemState, TelemetryFrame};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SensorDataResponse {
    #[serde(default)]
    sensors: Option<Map<String, Value>>,
    #[serde(default)]
    risk: Value,
    #[serde(default)]
    distance_m: Value,
    #[serde(default)]
    system_state: Value,
    #[serde(default)]
    stress: Value,
}

impl HttpBackend {
    /// `timeout` of `None` keeps reqwest's default of no request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn stress_start_url(&self, seconds: u32, intensity: f64) -> String {
        self.build_url(&format!(
            "/stress/start?seconds={}&intensity={}",
            seconds, intensity
        ))
    }

    async fn post_empty(&self, url: &str) -> Result<(), BackendError> {
        let response = self.client.post(url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl TelemetryBackend for HttpBackend {
    async fn fetch_frame(&self) -> Result<TelemetryFrame, BackendError> {
        let url = self.build_url("/sensor_data");
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        decode_frame(&body, TelemetryFrame::now_label())
    }

    async fn start_stress(&self, seconds: u32, intensity: f64) -> Result<(), BackendError> {
        let url = self.stress_start_url(seconds, intensity);
        tracing::debug!("POST {}", url);
        self.post_empty(&url).await
    }

    async fn stop_stress(&self) -> Result<(), BackendError> {
        let url = self.build_url("/stress/stop");
        tracing::debug!("POST {}", url);
        self.post_empty(&url).await
    }
}

/// Decode a `/sensor_data` body. Numeric fields that are missing, invalid or
/// outside the `f64` range become 0; only a missing `sensors` object rejects
/// the frame.
pub fn decode_frame(body: &str, timestamp_label: String) -> Result<TelemetryFrame, BackendError> {
    let raw: SensorDataResponse = serde_json::from_str(body)?;
    let sensors = raw
        .sensors
        .ok_or_else(|| BackendError::Shape("missing `sensors` object".to_string()))?;

    Ok(TelemetryFrame {
        timestamp_label,
        sensors: SensorSample::from_readings(|channel| {
            sensors.get(channel.id()).and_then(coerce_number).unwrap_or(0.0)
        }),
        risk: coerce_number(&raw.risk).unwrap_or(0.0),
        distance_m: coerce_number(&raw.distance_m),
        system_state: SystemState::parse(raw.system_state.as_str()),
        stress: decode_stress(&raw.stress),
    })
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn decode_stress(value: &Value) -> StressStatus {
    let Some(obj) = value.as_object() else {
        return StressStatus::default();
    };

    StressStatus {
        active: obj.get("active").and_then(Value::as_bool).unwrap_or(false),
        seconds_left: obj
            .get("seconds_left")
            .and_then(coerce_number)
            .map(|s| s.max(0.0) as u32)
            .unwrap_or(0),
    }
}
