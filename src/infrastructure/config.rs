use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub backend: BackendSettings,
    pub poller: PollerSettings,
    pub stress: StressSettings,
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollerSettings {
    pub interval_ms: u64,
    pub history_capacity: usize,
}

impl PollerSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StressSettings {
    pub default_seconds: u32,
    pub default_intensity: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewSettings {
    pub enabled: bool,
    pub bind: String,
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("backend.base_url", "http://127.0.0.1:5000")?
        .set_default("poller.interval_ms", 1000)?
        .set_default("poller.history_capacity", 30)?
        .set_default("stress.default_seconds", 30)?
        .set_default("stress.default_intensity", 0.9)?
        .set_default("view.enabled", true)?
        .set_default("view.bind", "127.0.0.1:8080")
}

/// `TELEMETRY__POLLER__INTERVAL_MS=250` sets `poller.interval_ms`.
fn environment() -> Environment {
    Environment::with_prefix("TELEMETRY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl ClientConfig {
    fn validated(self) -> anyhow::Result<Self> {
        if self.poller.history_capacity == 0 {
            anyhow::bail!("poller.history_capacity must be at least 1");
        }
        Ok(self)
    }
}

/// Defaults, then `config/client.toml` if present, then `TELEMETRY__*` env vars.
pub fn load_client_config() -> anyhow::Result<ClientConfig> {
    let settings = with_defaults()?
        .add_source(File::with_name("config/client").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize::<ClientConfig>()?.validated()
}

/// Parse a TOML document layered over the defaults.
pub fn parse_client_config(toml: &str) -> anyhow::Result<ClientConfig> {
    let settings = with_defaults()?
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;

    settings.try_deserialize::<ClientConfig>()?.validated()
}
