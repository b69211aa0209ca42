// Telemetry data domain models
use serde::Serialize;
use std::fmt;

/// One named sensor metric tracked over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[serde(rename = "temperature_c")]
    Temperature,
    #[serde(rename = "pressure_bar")]
    Pressure,
    #[serde(rename = "load_pct")]
    Load,
    Throughput,
    Vibration,
    Humidity,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Temperature,
        Channel::Pressure,
        Channel::Load,
        Channel::Throughput,
        Channel::Vibration,
        Channel::Humidity,
    ];

    /// Field name used by the backend JSON contract
    pub fn id(self) -> &'static str {
        match self {
            Channel::Temperature => "temperature_c",
            Channel::Pressure => "pressure_bar",
            Channel::Load => "load_pct",
            Channel::Throughput => "throughput",
            Channel::Vibration => "vibration",
            Channel::Humidity => "humidity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Temperature => "Temperature",
            Channel::Pressure => "Pressure",
            Channel::Load => "Load",
            Channel::Throughput => "Throughput",
            Channel::Vibration => "Vibration",
            Channel::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Pressure => "bar",
            Channel::Load => "%",
            Channel::Throughput => "u/min",
            Channel::Vibration => "mm/s",
            Channel::Humidity => "%",
        }
    }

    /// Decimal places shown on the KPI tile
    pub fn precision(self) -> usize {
        match self {
            Channel::Temperature => 1,
            Channel::Pressure => 2,
            Channel::Load => 0,
            Channel::Throughput => 0,
            Channel::Vibration => 2,
            Channel::Humidity => 0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Channel::Temperature => "#ef4444",
            Channel::Pressure => "#3b82f6",
            Channel::Load => "#f59e0b",
            Channel::Throughput => "#10b981",
            Channel::Vibration => "#8b5cf6",
            Channel::Humidity => "#06b6d4",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Six sensor readings of one frame. Values are always finite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSample {
    pub temperature_c: f64,
    pub pressure_bar: f64,
    pub load_pct: f64,
    pub throughput: f64,
    pub vibration: f64,
    pub humidity: f64,
}

impl SensorSample {
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Temperature => self.temperature_c,
            Channel::Pressure => self.pressure_bar,
            Channel::Load => self.load_pct,
            Channel::Throughput => self.throughput,
            Channel::Vibration => self.vibration,
            Channel::Humidity => self.humidity,
        }
    }

    /// Builds a sample from per-channel readings, replacing non-finite values with 0.
    pub fn from_readings(mut read: impl FnMut(Channel) -> f64) -> Self {
        let mut value = |channel| finite_or_zero(read(channel));
        Self {
            temperature_c: value(Channel::Temperature),
            pressure_bar: value(Channel::Pressure),
            load_pct: value(Channel::Load),
            throughput: value(Channel::Throughput),
            vibration: value(Channel::Vibration),
            humidity: value(Channel::Humidity),
        }
    }
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemState {
    Running,
    Stopped,
    Other(String),
}

impl SystemState {
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("RUNNING") => SystemState::Running,
            Some("STOPPED") => SystemState::Stopped,
            Some(other) => SystemState::Other(other.to_string()),
            None => SystemState::Other(Self::UNKNOWN.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SystemState::Running => "RUNNING",
            SystemState::Stopped => "STOPPED",
            SystemState::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StressStatus {
    pub active: bool,
    pub seconds_left: u32,
}

/// One polled snapshot of the plant.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    pub timestamp_label: String,
    pub sensors: SensorSample,
    pub risk: f64,
    pub distance_m: Option<f64>,
    pub system_state: SystemState,
    pub stress: StressStatus,
}

impl TelemetryFrame {
    /// Label for a frame created now, in local wall-clock time.
    pub fn now_label() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}
