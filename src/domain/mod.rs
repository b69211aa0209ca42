// Domain layer - Plant telemetry models and decision rules
pub mod advisory;
pub mod chart;
pub mod dashboard;
pub mod history;
pub mod telemetry;
