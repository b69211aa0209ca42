// Renderer capability - The only way the core reaches a UI surface
use crate::domain::chart::ChartView;
use crate::domain::telemetry::Channel;
use std::time::Duration;

/// Visual state flags for the system status slot. Never both true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateStyle {
    pub running: bool,
    pub stopped: bool,
}

/// UI slots the presenters write to.
///
/// Every method defaults to a no-op, so a surface that lacks a slot simply
/// does not override the corresponding method.
pub trait Renderer: Send {
    fn set_kpi(&mut self, _channel: Channel, _text: &str) {}

    fn update_charts(&mut self, _sensors: &ChartView<'_>, _risk: &ChartView<'_>) {}

    fn set_system_state(&mut self, _text: &str, _style: StateStyle, _pulse: Duration) {}

    /// `countdown` is present only while the banner is visible.
    fn set_stress_banner(&mut self, _visible: bool, _countdown: Option<&str>) {}

    fn set_recommendation(&mut self, _text: &str) {}
}

/// Renderer used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
