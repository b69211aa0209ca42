// Web renderer - Writes presenter output into the shared view model
use crate::application::presenters::FALLBACK_TOKEN;
use crate::application::renderer::{Renderer, StateStyle};
use crate::domain::chart::{ChartKind, ChartView};
use crate::domain::telemetry::Channel;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct KpiTileView {
    pub id: Channel,
    pub label: &'static str,
    pub unit: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSnapshot {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSnapshot {
    pub id: String,
    pub title: String,
    pub kind: &'static str,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub show_legend: bool,
    pub labels: Vec<String>,
    pub series: Vec<SeriesSnapshot>,
}

impl From<&ChartView<'_>> for ChartSnapshot {
    fn from(view: &ChartView<'_>) -> Self {
        Self {
            id: view.spec.id.clone(),
            title: view.spec.title.clone(),
            kind: match view.spec.kind {
                ChartKind::Line => "line",
                ChartKind::MultiLine => "multiLine",
            },
            y_min: view.spec.y_min,
            y_max: view.spec.y_max,
            show_legend: view.spec.show_legend,
            labels: view.labels.iter().cloned().collect(),
            series: view
                .series
                .iter()
                .map(|s| SeriesSnapshot {
                    id: s.spec.id.clone(),
                    name: s.spec.name.clone(),
                    color: s.spec.color.clone(),
                    values: s.values.iter().copied().collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemStateView {
    pub text: String,
    pub running: bool,
    pub stopped: bool,
    pub pulse_ms: u64,
    pub updates: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StressBannerView {
    pub visible: bool,
    pub countdown: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub kpis: Vec<KpiTileView>,
    pub sensor_chart: ChartSnapshot,
    pub risk_chart: ChartSnapshot,
    pub system_state: SystemStateView,
    pub stress_banner: StressBannerView,
    pub recommendation: Option<String>,
    /// Chart redraws applied so far, one per rendered tick.
    pub frames_rendered: u64,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            kpis: Channel::ALL
                .into_iter()
                .map(|channel| KpiTileView {
                    id: channel,
                    label: channel.label(),
                    unit: channel.unit(),
                    text: FALLBACK_TOKEN.to_string(),
                })
                .collect(),
            sensor_chart: ChartSnapshot::default(),
            risk_chart: ChartSnapshot::default(),
            system_state: SystemStateView {
                text: FALLBACK_TOKEN.to_string(),
                running: false,
                stopped: false,
                pulse_ms: 0,
                updates: 0,
            },
            stress_banner: StressBannerView::default(),
            recommendation: None,
            frames_rendered: 0,
        }
    }
}

/// Dashboard view shared between the renderer and the HTTP handlers.
#[derive(Debug, Clone, Default)]
pub struct SharedView(Arc<RwLock<DashboardView>>);

impl SharedView {
    pub fn read(&self) -> RwLockReadGuard<'_, DashboardView> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DashboardView> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone)]
pub struct WebRenderer {
    view: SharedView,
}

impl WebRenderer {
    pub fn new(view: SharedView) -> Self {
        Self { view }
    }
}

impl Renderer for WebRenderer {
    fn set_kpi(&mut self, channel: Channel, text: &str) {
        let mut view = self.view.write();
        if let Some(tile) = view.kpis.iter_mut().find(|t| t.id == channel) {
            tile.text = text.to_string();
        }
    }

    fn update_charts(&mut self, sensors: &ChartView<'_>, risk: &ChartView<'_>) {
        let mut view = self.view.write();
        view.sensor_chart = ChartSnapshot::from(sensors);
        view.risk_chart = ChartSnapshot::from(risk);
        view.frames_rendered += 1;
    }

    fn set_system_state(&mut self, text: &str, style: StateStyle, pulse: Duration) {
        let mut view = self.view.write();
        let state = &mut view.system_state;
        state.text = text.to_string();
        state.running = style.running;
        state.stopped = style.stopped;
        state.pulse_ms = pulse.as_millis() as u64;
        state.updates += 1;
    }

    fn set_stress_banner(&mut self, visible: bool, countdown: Option<&str>) {
        self.view.write().stress_banner = StressBannerView {
            visible,
            countdown: countdown.map(str::to_string),
        };
    }

    fn set_recommendation(&mut self, text: &str) {
        self.view.write().recommendation = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::Dashboard;
    use crate::domain::telemetry::{SensorSample, StressStatus, SystemState, TelemetryFrame};

    fn frame(stress: StressStatus) -> TelemetryFrame {
        TelemetryFrame {
            timestamp_label: "08:15:00".to_string(),
            sensors: SensorSample {
                temperature_c: 72.04,
                pressure_bar: 3.5,
                load_pct: 80.2,
                throughput: 210.0,
                vibration: 5.555,
                humidity: 39.0,
            },
            risk: 0.71,
            distance_m: Some(1.0),
            system_state: SystemState::Stopped,
            stress,
        }
    }

    #[test]
    fn test_view_starts_with_fallbacks() {
        let view = SharedView::default();
        let view = view.read();
        assert_eq!(view.kpis.len(), 6);
        assert!(view.kpis.iter().all(|k| k.text == FALLBACK_TOKEN));
        assert!(!view.stress_banner.visible);
        assert!(view.recommendation.is_none());
        assert_eq!(view.frames_rendered, 0);
    }

    #[test]
    fn test_dashboard_renders_into_view() {
        let view = SharedView::default();
        let mut dashboard = Dashboard::new(30, Box::new(WebRenderer::new(view.clone())));

        dashboard.apply_frame(0, &frame(StressStatus { active: true, seconds_left: 12 }));

        let snapshot = view.read().clone();
        assert_eq!(snapshot.kpis[0].text, "72.0");
        assert_eq!(snapshot.sensor_chart.series.len(), 6);
        assert_eq!(snapshot.sensor_chart.labels, vec!["08:15:00"]);
        assert_eq!(snapshot.risk_chart.series[0].values, vec![0.71]);
        assert_eq!(snapshot.risk_chart.y_max, Some(1.0));
        assert!(snapshot.system_state.stopped && !snapshot.system_state.running);
        assert_eq!(snapshot.system_state.pulse_ms, 120);
        assert!(snapshot.stress_banner.visible);
        assert_eq!(snapshot.stress_banner.countdown.as_deref(), Some("12"));
        assert!(snapshot.recommendation.unwrap().starts_with("CRITICAL"));
        assert_eq!(snapshot.frames_rendered, 1);

        dashboard.apply_frame(1, &frame(StressStatus::default()));
        let snapshot = view.read().clone();
        assert!(!snapshot.stress_banner.visible);
        assert_eq!(snapshot.stress_banner.countdown, None);
        assert_eq!(snapshot.system_state.updates, 2);
        assert_eq!(snapshot.risk_chart.labels.len(), 2);
        assert_eq!(snapshot.frames_rendered, 2);

        assert!(!dashboard.apply_frame(0, &frame(StressStatus::default())));
        assert_eq!(view.read().frames_rendered, 2);
    }

    #[test]
    fn test_view_serializes_channel_ids() {
        let json = serde_json::to_value(&*SharedView::default().read()).unwrap();
        assert_eq!(json["kpis"][0]["id"], "temperature_c");
        assert_eq!(json["kpis"][2]["id"], "load_pct");
        assert_eq!(json["frames_rendered"], 0);
    }
}
