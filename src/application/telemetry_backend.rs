// Backend trait for telemetry and stress-scenario access
use crate::domain::telemetry::TelemetryFrame;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

#[async_trait]
pub trait TelemetryBackend: Send + Sync {
    /// Fetch one telemetry snapshot
    async fn fetch_frame(&self) -> Result<TelemetryFrame, BackendError>;

    /// Begin a synthetic load scenario
    async fn start_stress(&self, seconds: u32, intensity: f64) -> Result<(), BackendError>;

    /// End the running load scenario
    async fn stop_stress(&self) -> Result<(), BackendError>;
}
